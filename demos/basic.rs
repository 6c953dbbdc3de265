use riccati_bessel::*;

fn main() {
    let x = 1.0_f64;

    // -- All orders into a caller-owned buffer --
    println!("=== psi_k({x}) for k = 0..=5 (buffer) ===");
    let mut psi = [0.0_f64; 6];
    riccati_jn_into(&mut psi, 5, x).unwrap();
    for (k, val) in psi.iter().enumerate() {
        println!("  psi_{k}({x}) = {val:.12e}");
    }

    // -- Allocating form --
    println!("\n=== psi_k(5000) for k = 0..=3 (Vec) ===");
    for (k, val) in riccati_jn(3, 5000.0).iter().enumerate() {
        println!("  psi_{k}(5000) = {val:.12}");
    }

    // -- Single order --
    println!("\n=== Single order ===");
    let p10 = riccati_j(10, 20.0);
    println!("psi_10(20) = {p10:.12}");

    // -- Lazy iteration --
    println!("\n=== First orders at x = pi/2 (iterator) ===");
    for (k, val) in RiccatiJ::new(core::f64::consts::FRAC_PI_2).take(4).enumerate() {
        println!("  psi_{k}(pi/2) = {val:.12}");
    }

    // -- Undersized buffer --
    println!("\n=== Buffer check ===");
    let mut short = [0.0_f64; 2];
    match riccati_jn_into(&mut short, 4, x) {
        Ok(()) => println!("unexpected success"),
        Err(e) => println!("error: {e}"),
    }

    // -- Upward recurrence at small x --
    println!("\n=== Small argument, high order ===");
    let small = riccati_jn(30, 0.01);
    println!("psi_30(0.01) = {:e} (upward recurrence, not stabilized)", small[30]);
}
