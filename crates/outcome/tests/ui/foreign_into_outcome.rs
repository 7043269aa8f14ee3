use nebula_outcome::{IntoOutcome, Outcome};

struct Lookalike;

impl IntoOutcome<i32, ()> for Lookalike {
    fn into_outcome(self) -> Outcome<i32, ()> {
        Outcome::Ok(1)
    }
}

fn main() {}
