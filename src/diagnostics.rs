use std::time::Instant;

#[inline]
pub fn log_fetch(scope: &str, started_at: Instant, items: usize) {
    let elapsed_ms = started_at.elapsed().as_millis();
    eprintln!("[fetch] {scope} returned {items} item(s) in {elapsed_ms}ms");
}
