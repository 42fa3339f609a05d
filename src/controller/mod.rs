pub mod auth;
pub mod health;
pub mod protected;

#[cfg(test)]
mod test;
