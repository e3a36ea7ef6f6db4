use rand::{distr::Alphanumeric, seq::IndexedRandom, Rng};

static FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Claude", "Dennis", "Donald", "Edsger", "Frances", "Grace",
    "Hedy", "Ivan", "John", "Katherine", "Ken", "Leslie", "Linus", "Margaret", "Niklaus",
    "Radia", "Robin", "Shafi", "Sophie", "Tim", "Vint",
];

static LAST_NAMES: &[&str] = &[
    "Allen", "Backus", "Cerf", "Dijkstra", "Floyd", "Goldwasser", "Hamilton", "Hopper",
    "Johnson", "Kay", "Knuth", "Lamport", "Liskov", "Lovelace", "Milner", "Perlman",
    "Ritchie", "Shannon", "Sutherland", "Thompson", "Torvalds", "Turing", "Wilson", "Wirth",
];

static SAFE_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

pub(super) fn first_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    FIRST_NAMES.choose(rng).copied().unwrap_or("Ada")
}

pub(super) fn last_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    LAST_NAMES.choose(rng).copied().unwrap_or("Lovelace")
}

/// Email on a reserved example domain; `unique` keeps the local part unique.
pub(super) fn safe_email<R: Rng + ?Sized>(
    rng: &mut R,
    first: &str,
    last: &str,
    unique: &str,
) -> String {
    let domain = SAFE_DOMAINS.choose(rng).copied().unwrap_or("example.com");

    format!(
        "{}.{}.{}@{}",
        first.to_lowercase(),
        last.to_lowercase(),
        unique,
        domain
    )
}

pub(super) fn alphanumeric<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}
