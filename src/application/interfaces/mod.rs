/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// GitHub Actions service interface
pub mod action;
/// Code scanning service interface
pub mod code_scanning;
/// Deployment service interface
pub mod deployment;
/// Environment service interface
pub mod environment;
/// Issue service interface
pub mod issue;
/// Reaction service interface
pub mod reaction;
/// Repository service interface
pub mod repository;
/// Team service interface
pub mod team;
/// User service interface
pub mod user;
