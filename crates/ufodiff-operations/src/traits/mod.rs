mod vcs_provider;

pub use vcs_provider::VcsProvider;
