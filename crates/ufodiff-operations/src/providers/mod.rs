mod git;

pub use git::Git2Provider;
