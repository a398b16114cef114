//! C dialect with KLEE symbolic inputs.

use super::{join_with, param_lines, Fragments};
use crate::request::{GenerationRequest, Sign};

pub fn render(request: &GenerationRequest) -> String {
    let branches: Vec<_> = request.branches().collect();
    let vars: Vec<String> = branches.iter().map(|b| b.var()).collect();
    let mut f = Fragments::new();

    f.line(0, "#include <assert.h>")
        .line(0, "#include <stdbool.h>")
        .line(0, "#include <klee.h>");

    f.line(0, "int test(");
    let params: Vec<String> = vars.iter().map(|v| format!("bool {v}")).collect();
    param_lines(&mut f, &params);
    f.line(0, ") {");
    f.line(1, "int r = 0;");
    for b in &branches {
        let op = match b.sign {
            Sign::Plus => '+',
            Sign::Minus => '-',
        };
        f.line(1, format!("if ({}) {{", b.var()))
            .line(2, format!("r {op}= {};", b.index))
            .line(1, "}");
    }
    f.line(1, "assert(r >= 0);")
        .line(1, "return r;")
        .line(0, "}");

    f.line(0, "int main() {");
    for v in &vars {
        f.line(1, format!("bool {v};"));
    }
    for v in &vars {
        f.line(1, format!("klee_make_symbolic(&{v}, sizeof({v}), \"{v}\");"));
    }
    f.line(1, format!("return test({});", join_with(&vars, ", ")));
    f.line(0, "}");

    f.finish()
}
