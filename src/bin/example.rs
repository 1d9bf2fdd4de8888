use dynamic_cover::{DynamicCoverSolver, LeveledCoverEngine};

fn ins(t: &mut impl DynamicCoverSolver, u: usize, v: usize) {
    println!("Inserting edge from {} to {}", u, v);
    t.insert(u, v).unwrap();
}

fn del(t: &mut impl DynamicCoverSolver, u: usize, v: usize) {
    println!("Deleting edge from {} to {}", u, v);
    t.delete(u, v).unwrap();
}

fn main() {
    let mut t = LeveledCoverEngine::new(8, 0.25);
    ins(&mut t, 0, 1);
    ins(&mut t, 2, 3);
    ins(&mut t, 3, 4);
    del(&mut t, 0, 1);
    ins(&mut t, 3, 5);
    ins(&mut t, 3, 6);
    ins(&mut t, 0, 6);
    ins(&mut t, 0, 3);
    ins(&mut t, 0, 4);
    ins(&mut t, 1, 5);
    ins(&mut t, 2, 4);
    ins(&mut t, 4, 7);
    ins(&mut t, 6, 4);
    del(&mut t, 3, 5);
    del(&mut t, 2, 3);
    ins(&mut t, 7, 3);
    del(&mut t, 3, 4);
    del(&mut t, 3, 6);
    ins(&mut t, 2, 7);
    del(&mut t, 4, 6);
    println!();
    print!("{}", t.describe());
}
