// Candidate Normalizer: loosely-typed provider records in, normalized views out.
// Alias handling lives in `entries`; scorers only see `CandidateProfile`.

pub mod dates;
pub mod entries;
pub mod profile;
pub mod record;

pub use profile::CandidateProfile;
pub use record::CandidateRecord;
