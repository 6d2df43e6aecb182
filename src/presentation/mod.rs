/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// Workflows and workflow runs
pub mod action;
/// Code scanning alerts, analyses and SARIF uploads
pub mod code_scanning;
/// Deployments and deployment statuses
pub mod deployment;
/// Deployment environments and their protection rules
pub mod environment;
/// Issues, labels, milestones and comments
pub mod issue;
/// Reactions and reaction summaries
pub mod reaction;
/// Repositories, topics and contributors
pub mod repository;
/// Serialization utilities for API payloads
pub mod serialization;
/// Organization teams and memberships
pub mod team;
/// Users and organizations
pub mod user;
