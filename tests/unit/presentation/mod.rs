mod test_issue;
mod test_repository;
mod test_serialization;
