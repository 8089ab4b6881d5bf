// Skill analysis core: normalization, matching, ATS scoring, recommendation formatting.
// Every stage is a pure function of its inputs; `pipeline` composes them per request.
// No stage here performs I/O or keeps state between requests.

pub mod ats;
pub mod formatter;
pub mod handlers;
pub mod matching;
pub mod normalizer;
pub mod pipeline;
pub mod result;
pub mod rules;
