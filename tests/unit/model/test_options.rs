use gh_client::model::options::*;
use gh_client::presentation::reaction::ReactionContent;
use gh_client::presentation::serialization::Timestamp;

#[test]
fn test_list_options_builders() {
    let opts = ListOptions::default().with_page(4).with_per_page(100);
    assert_eq!(opts, ListOptions::new(4, 100));
}

#[test]
fn test_issue_options_encoding() {
    let opts = IssueListByRepoOptions {
        state: Some("all".to_string()),
        labels: vec!["bug".to_string(), "p1".to_string()],
        since: Timestamp::from_unix(1_700_000_000),
        list: ListOptions::default().with_per_page(50),
        ..Default::default()
    };
    let path = add_options("repos/o/r/issues", Some(&opts)).unwrap();
    assert_eq!(
        path,
        "repos/o/r/issues?state=all&labels=bug%2Cp1&since=2023-11-14T22%3A13%3A20Z&per_page=50"
    );
}

#[test]
fn test_workflow_run_options_encoding() {
    let opts = ListWorkflowRunsOptions {
        branch: Some("main".to_string()),
        exclude_pull_requests: Some(true),
        check_suite_id: Some(42),
        ..Default::default()
    };
    let path = add_options("repos/o/r/actions/runs", Some(&opts)).unwrap();
    assert_eq!(
        path,
        "repos/o/r/actions/runs?branch=main&exclude_pull_requests=true&check_suite_id=42"
    );
}

#[test]
fn test_alert_options_use_cursors() {
    let opts = AlertListOptions {
        state: Some("open".to_string()),
        git_ref: Some("refs/heads/main".to_string()),
        list_cursor: ListCursorOptions {
            per_page: Some(10),
            after: Some("Y3Vyc29y".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    let path = add_options("orgs/acme/code-scanning/alerts", Some(&opts)).unwrap();
    assert_eq!(
        path,
        "orgs/acme/code-scanning/alerts?state=open&ref=refs%2Fheads%2Fmain&per_page=10&after=Y3Vyc29y"
    );
}

#[test]
fn test_user_list_options_since() {
    let opts = UserListOptions {
        since: Some(1024),
        per_page: Some(10),
    };
    assert_eq!(
        add_options("users", Some(&opts)).unwrap(),
        "users?since=1024&per_page=10"
    );
}

#[test]
fn test_reaction_filter_and_paging() {
    let opts = ListReactionOptions {
        content: Some(ReactionContent::Heart),
        list: ListOptions::new(2, 5),
    };
    assert_eq!(
        add_options("repos/o/r/issues/1/reactions", Some(&opts)).unwrap(),
        "repos/o/r/issues/1/reactions?content=heart&page=2&per_page=5"
    );
}

#[test]
fn test_deployment_and_team_options() {
    let opts = DeploymentsListOptions {
        git_ref: Some("v1.0".to_string()),
        environment: Some("production".to_string()),
        ..Default::default()
    };
    assert_eq!(
        add_options("repos/o/r/deployments", Some(&opts)).unwrap(),
        "repos/o/r/deployments?ref=v1.0&environment=production"
    );

    let opts = TeamListTeamMembersOptions {
        role: Some("maintainer".to_string()),
        list: ListOptions::default(),
    };
    assert_eq!(
        add_options("orgs/o/teams/t/members", Some(&opts)).unwrap(),
        "orgs/o/teams/t/members?role=maintainer"
    );
}
