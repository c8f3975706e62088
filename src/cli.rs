use clap::Parser;

#[derive(Parser)]
#[clap(name = "oop-exercises")]
#[clap(about = "Training exercises for OOP fundamentals", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Parser)]
#[clap(name = "oop-exercises")]
#[clap(bin_name = "oop-exercises")]
pub enum Commands {
    /// Exercise 1: inheritance with Rectangle and Square
    #[clap()]
    Inheritance,
    /// Exercise 2: properties with Circle and its diameter
    #[clap()]
    Properties,
    /// Debugging practice with calculate_average
    #[clap()]
    Debugging,
}
