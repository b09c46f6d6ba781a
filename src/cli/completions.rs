use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    ai-task-manager completions bash > ~/.bash_completion.d/ai-task-manager\n\n\
                  Generate zsh completions:\n    ai-task-manager completions zsh > ~/.zfunc/_ai-task-manager\n\n\
                  Generate fish completions:\n    ai-task-manager completions fish > ~/.config/fish/completions/ai-task-manager.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
