pub mod flow;
pub mod locale;
pub mod matching;
pub mod onboarding;
pub mod sessions;
