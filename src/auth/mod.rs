// Auth module
// Verification of the identity collaborator's JWT bearer tokens

pub mod jwt;
