mod canonical;
mod term;

pub use canonical::LiteralCanonicalizer;
pub use term::TermNormalizer;
