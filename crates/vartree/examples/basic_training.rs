//! Train a tree on a tiny dataset and predict a new sample.
//!
//! Run with: `cargo run --example basic_training`

use ndarray::array;
use vartree::{RegressionTree, TreeConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example data
    let features = array![
        [1.0f32, 2.0],
        [2.0, 3.0],
        [3.0, 4.0],
        [4.0, 5.0],
        [5.0, 6.0],
    ];
    let targets = array![1.0f32, 2.0, 3.0, 4.0, 5.0];

    // Train the model
    let config = TreeConfig::builder().build()?;
    let model = RegressionTree::train(features.view(), targets.view(), config)?;
    println!("trained: {model:?}");

    // Predict a new sample
    let prediction = model.predict_one(&[6.0, 7.0])?;
    println!("Prediction: {prediction}");

    Ok(())
}
