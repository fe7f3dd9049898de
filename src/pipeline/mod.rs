// Pipeline orchestration — strict phase ordering from taxonomy to report.

pub mod run;

pub use run::run;
