//! codegen
//!
//! Fixture rendering.
//!
//! Each dialect pushes ordered line fragments into a `Fragments` buffer;
//! the buffer is joined once at the end. Fragments carry their own
//! indentation (tabs), and every line ends with `\n`.

pub mod c;
pub mod rust;

use rand::Rng;

use crate::request::{GenerationRequest, Language};

/* ============================================================
   Public API
   ============================================================ */

/// Render the full fixture source for `request`.
///
/// `rng` is only consumed by the Rust dialect (one draw per branch).
pub fn render<R: Rng>(request: &GenerationRequest, rng: &mut R) -> String {
    match request.language {
        Language::C => c::render(request),
        Language::Rust => rust::render(request, rng),
    }
}

/* ============================================================
   Fragment buffer
   ============================================================ */

#[derive(Debug, Default)]
pub struct Fragments {
    lines: Vec<String>,
}

impl Fragments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, depth: usize, text: impl AsRef<str>) -> &mut Self {
        self.lines
            .push(format!("{}{}", "\t".repeat(depth), text.as_ref()));
        self
    }

    pub fn finish(self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for l in self.lines {
            out.push_str(&l);
            out.push('\n');
        }
        out
    }
}

/// `c1, c2, c3` for ", ", `r1 + r2` for " + "
pub(crate) fn join_with<I, S>(items: I, sep: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Parameter lines: every entry but the last gets a trailing comma.
pub(crate) fn param_lines(f: &mut Fragments, params: &[String]) {
    let last = params.len().saturating_sub(1);
    for (i, p) in params.iter().enumerate() {
        let sep = if i == last { "" } else { "," };
        f.line(1, format!("{p}{sep}"));
    }
}
