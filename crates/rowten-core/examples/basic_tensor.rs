//! Basic tensor creation and manipulation examples.
//!
//! This example demonstrates the core functionality of rowten-core:
//! - Creating tensors with different initialization methods
//! - Accessing tensor properties (rank, shape, size)
//! - Chained and direct indexing
//! - Elementwise arithmetic
//! - Destructive resize
//!
//! Run with:
//! ```bash
//! cargo run --example basic_tensor
//! ```

use rowten_core::Tensor;

fn main() {
    println!("=== RowTen Core: Basic Tensor Examples ===\n");

    // Example 1: Creating tensors with different methods
    example_creation();

    // Example 2: Tensor properties and inspection
    example_properties();

    // Example 3: Chained and direct indexing
    example_indexing();

    // Example 4: Elementwise arithmetic
    example_arithmetic();

    // Example 5: Destructive resize
    example_resize();

    println!("\n=== All examples completed successfully! ===");
}

fn example_creation() {
    println!("--- Example 1: Tensor Creation ---");

    let zeros = Tensor::<f64>::zeros(&[2, 3]);
    println!("Zeros tensor [2, 3]:");
    println!("  Shape: {:?}", zeros.shape());
    println!("  First element: {}", zeros[&[0, 0]]);

    let ones = Tensor::<f64>::ones(&[3, 4]);
    println!("\nOnes tensor [3, 4]:");
    println!("  Element at [1, 2]: {}", ones[&[1, 2]]);

    let fives = Tensor::from_elem(&[2, 2, 2], 5.0);
    println!("\nTensor filled with 5.0 [2, 2, 2]:");
    println!("  Element at [0, 1, 1]: {}", fives[&[0, 1, 1]]);

    let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let from_vec = Tensor::from_vec(data, &[2, 3]).unwrap();
    println!("\nTensor from vector [2, 3]:");
    println!("  Element at [0, 0]: {}", from_vec[&[0, 0]]);
    println!("  Element at [1, 2]: {}", from_vec[&[1, 2]]);

    println!();
}

fn example_properties() {
    println!("--- Example 2: Tensor Properties ---");

    let tensor = Tensor::<f64>::zeros(&[10, 20, 30]);
    println!("Tensor shape: [10, 20, 30]");
    println!("  Rank (number of dimensions): {}", tensor.rank());
    println!("  Shape: {:?}", tensor.shape());
    println!("  Total elements: {}", tensor.len());
    println!("  Is empty? {}", tensor.is_empty());

    let empty = Tensor::<f64>::new();
    println!("\nDefault-constructed tensor:");
    println!("  Total elements: {}", empty.len());
    println!("  Is empty? {}", empty.is_empty());

    println!();
}

fn example_indexing() {
    println!("--- Example 3: Indexing ---");

    let mut tensor = Tensor::<f64>::zeros(&[6, 5, 4]);

    // Fill with an incrementing counter through chained cursors
    let mut cnt = 0.0;
    for i in 0..6 {
        for j in 0..5 {
            for k in 0..4 {
                tensor.at_mut(i).at(j).at(k).set(cnt);
                cnt += 1.0;
            }
        }
    }

    println!("Counter-filled tensor [6, 5, 4]:");
    println!("  Chained  [2][3][1]: {}", tensor.at(2).at(3).at(1).value());
    println!("  Direct   [2, 3, 1]: {}", tensor[&[2, 3, 1]]);
    println!("  Expected          : {}", 2 * 20 + 3 * 4 + 1);

    // Checked access reports failures instead of panicking
    match tensor.get_checked(&[9, 9, 9]) {
        Ok(value) => println!("  Unexpected value: {}", value),
        Err(err) => println!("  Checked access error: {}", err),
    }

    println!();
}

fn example_arithmetic() {
    println!("--- Example 4: Elementwise Arithmetic ---");

    let mut a = Tensor::<f64>::zeros(&[3, 3]);
    let mut b = Tensor::<f64>::zeros(&[3, 3]);
    a.fill_with(|idx| (idx[0] * 3 + idx[1]) as f64);
    b.fill_with(|idx| (idx[0] * 3 + idx[1] + 1) as f64);

    a += &b;
    println!("After a += b:");
    println!("  a[1, 1] = {}", a[&[1, 1]]);

    let sum = &a + &b;
    let prod = &a * &b;
    println!("\nBinary operators produce new tensors:");
    println!("  (a + b)[1, 1] = {}", sum[&[1, 1]]);
    println!("  (a * b)[1, 1] = {}", prod[&[1, 1]]);
    println!("  a is untouched: a[1, 1] = {}", a[&[1, 1]]);

    println!();
}

fn example_resize() {
    println!("--- Example 5: Destructive Resize ---");

    let mut tensor = Tensor::<i64>::zeros(&[6, 5, 4]);
    tensor.fill_with(|idx| (idx[0] * 20 + idx[1] * 4 + idx[2]) as i64);
    println!("Before resize: shape {:?}, {} elements", tensor.shape(), tensor.len());

    tensor.resize(&[3, 3, 3, 3]);
    println!("After resize:  shape {:?}, {} elements", tensor.shape(), tensor.len());
    println!("  Contents are zeroed: [0][0][0][0] = {}", tensor[&[0, 0, 0, 0]]);

    println!();
}
