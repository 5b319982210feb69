use sudoku_generator::{GeneratorConfig, GeneratorMode, generate};

fn main() {
    let mut rng = rand::rng();
    let puzzle = generate(9, GeneratorMode::Unique, GeneratorConfig::default(), &mut rng)
        .expect("9 is a valid grid size");
    print!("{puzzle}");
}
