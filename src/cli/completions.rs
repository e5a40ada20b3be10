use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    embedgen completions bash > ~/.bash_completion.d/embedgen\n\n\
                  Generate zsh completions:\n    embedgen completions zsh > ~/.zfunc/_embedgen\n\n\
                  Generate fish completions:\n    embedgen completions fish > ~/.config/fish/completions/embedgen.fish\n\n\
                  Generate PowerShell completions:\n    embedgen completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
