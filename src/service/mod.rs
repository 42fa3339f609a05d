pub mod classifier;
pub mod membership;
pub mod oauth;

#[cfg(test)]
mod test;
