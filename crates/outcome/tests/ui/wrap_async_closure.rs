use nebula_outcome::wrap;

fn main() {
    let _ = wrap(|| async { Ok::<_, ()>(1) });
}
