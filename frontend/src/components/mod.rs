pub mod social_proof;
