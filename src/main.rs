use clap::Parser;

use oop_exercises::debugging::{calculate_average, format_samples, Sample};
use oop_exercises::shapes::{Circle, Rectangle, Shape, Square};

mod cli;
use cli::{Cli, Commands};

/// Exercise 1: inheritance.
///
/// Rectangle and Square share the Shape contract, Square reuses Rectangle's
/// formulas instead of duplicating them.
fn run_inheritance() {
    let rect = Rectangle::new(5.0, 10.0);
    println!("{}", rect);
    println!("Area: {}", rect.area());
    println!("Perimeter: {}", rect.perimeter());

    let square = Square::new(7.0);
    println!("{}", square);
    println!("Area: {}", square.area());
    println!("Perimeter: {}", square.perimeter());
}

/// Exercise 2: properties.
///
/// The diameter is a computed, settable view over the stored radius. The
/// setter validates its input and rejects negative values.
fn run_properties() {
    let mut circle = Circle::new(5.0);
    println!("{}", circle);
    println!("Area: {:.2}", circle.area());
    println!("Circumference: {:.2}", circle.perimeter());
    println!("Diameter: {}", circle.diameter());

    if circle.set_diameter(14.0).is_ok() {
        println!("After changing diameter to 14:");
        println!("Radius is now: {}", circle.radius());
        println!("Area is now: {:.2}", circle.area());
    }

    match circle.set_diameter(-2.0) {
        Ok(()) => println!("Error: setting a negative diameter should fail"),
        Err(e) => println!("Correctly caught error: {}", e),
    }
}

/// Debugging practice script.
///
/// Two latent failure modes are left commented out for the learner to
/// trigger by hand: a text element fails the summation, an empty sequence
/// fails the division.
fn run_debugging() {
    println!("Debugging Example Script");

    let data1: Vec<Sample> = [1, 2, 3, 4, 5].into_iter().map(Sample::from).collect();
    match calculate_average(&data1) {
        Ok(avg1) => println!("Data1: {}, Average: {}", format_samples(&data1), avg1), // Expected: 3.0
        Err(e) => println!("Error: {}", e),
    }

    // Uncomment the following lines to trigger the type mismatch error
    // let data2: Vec<Sample> = vec![10.into(), 20.into(), "30".into(), 40.into()];
    // println!("\nProcessing Data2: {}", format_samples(&data2));
    // let avg2 = calculate_average(&data2).unwrap();
    // println!("Data2: {}, Average: {}", format_samples(&data2), avg2);

    // Uncomment the following lines to trigger the division by zero error
    // let data3: Vec<Sample> = vec![];
    // println!("\nProcessing Data3: {}", format_samples(&data3));
    // let avg3 = calculate_average(&data3).unwrap();
    // println!("Data3: {}, Average: {}", format_samples(&data3), avg3);
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inheritance => run_inheritance(),
        Commands::Properties => run_properties(),
        Commands::Debugging => run_debugging(),
    }
}
