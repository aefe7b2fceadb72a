//! Word game engine
//!
//! The dictionary, the letter ledger, the judge that accepts or rejects
//! submissions, and the enumerator that lists what is still formable.

mod dictionary;
mod enumerator;
mod judge;
pub mod ledger;
mod rules;

pub use dictionary::{Dictionary, DictionaryError, DictionaryStatus};
pub use enumerator::possible_words;
pub use judge::{Accepted, Verdict, WordJudge};
pub use rules::{MAX_WORD_LEN, MIN_WORD_LEN, Rules};
