// Analysis API: upload a resume plus a job title or job description and get
// keyword sets, a compatibility score and a recommendation back.

pub mod handlers;
pub mod pipeline;
