//! Rust dialect: concrete inputs baked in from the seeded generator.

use rand::Rng;

use super::{join_with, param_lines, Fragments};
use crate::request::{GenerationRequest, Sign};

pub fn render<R: Rng>(request: &GenerationRequest, rng: &mut R) -> String {
    let branches: Vec<_> = request.branches().collect();
    let mut f = Fragments::new();

    f.line(0, "fn test(");
    let params: Vec<String> = branches.iter().map(|b| format!("{}: bool", b.var())).collect();
    param_lines(&mut f, &params);
    f.line(0, ") -> i32 {");

    for b in &branches {
        let sign = match b.sign {
            Sign::Plus => "",
            Sign::Minus => "-",
        };
        f.line(1, format!("let r{} = if {} {{", b.index, b.var()))
            .line(2, format!("{sign}{}", b.index))
            .line(1, "} else {")
            .line(2, "0")
            .line(1, "};");
    }

    let sum = if branches.is_empty() {
        "0".to_string()
    } else {
        join_with(branches.iter().map(|b| format!("r{}", b.index)), " + ")
    };
    f.line(1, format!("let r = {sum};"))
        .line(1, "assert!(r >= 0);")
        .line(1, "return r;")
        .line(0, "}");

    let literals: Vec<&str> = branches
        .iter()
        .map(|_| if rng.random_bool(0.5) { "true" } else { "false" })
        .collect();
    f.line(0, "fn main() {")
        .line(1, format!("test({});", join_with(&literals, ", ")))
        .line(0, "}");

    f.finish()
}
