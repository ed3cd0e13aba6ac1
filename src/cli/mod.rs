pub mod catalog;
pub mod present;
pub mod stream;
pub mod tokenize;
pub mod training;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Command {
    /// Tokenize text (or every line of a file) with one method.
    Tokenize(tokenize::TokenizeArgs),

    /// Compare word, subword and character tokenization of the same text.
    Compare(tokenize::CompareArgs),

    /// Estimate the cost of a request for a model.
    Cost(catalog::CostArgs),

    /// List the pricing table.
    Models(catalog::ModelsArgs),

    /// Show coding challenges, or pick random ones without repeats.
    Challenges(catalog::ChallengesArgs),

    /// Run a guided walkthrough driven by stdin commands.
    Present(present::PresentArgs),

    /// Stream a scripted model response token by token.
    Stream(stream::StreamArgs),

    /// Cycle through the training loop phases, optionally auto-playing.
    Training(training::TrainingArgs),
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Tokenize(args) => tokenize::run(args),
        Command::Compare(args) => tokenize::compare(args),
        Command::Cost(args) => catalog::cost(args),
        Command::Models(args) => catalog::models(args),
        Command::Challenges(args) => catalog::challenges(args).await,
        Command::Present(args) => present::run(args).await,
        Command::Stream(args) => stream::run(args).await,
        Command::Training(args) => training::run(args).await,
    }
}
