use super::*;
use crate::{
    fake_api::{fields, Call, FakeRosterApi},
    form::{FormMode, SaveTarget},
    status::StatusSeverity,
    workflow::{ConfirmPrompt, FixedAnswer, BATCH_DELETE_FAILED, EMPLOYEE_DELETED},
};

struct RecordingPrompt {
    answer: bool,
    questions: Vec<String>,
}

impl ConfirmPrompt for RecordingPrompt {
    fn confirm(&mut self, question: &str) -> bool {
        self.questions.push(question.to_string());
        self.answer
    }
}

async fn loaded_session() -> RosterSession<FakeRosterApi> {
    let mut session = RosterSession::new(FakeRosterApi::seeded());
    session.load().await;
    session.api().clear_calls().await;
    session
}

#[tokio::test]
async fn load_renders_one_row_per_employee_with_exact_fields() {
    let mut session = RosterSession::new(FakeRosterApi::seeded());
    assert!(!session.view.roster.has_loaded());

    session.load().await;

    let rows = session.view.roster.rows();
    assert_eq!(rows.len(), 3);
    assert!(session.view.roster.shows_header());
    assert_eq!(rows[1].id, EmployeeId(2));
    assert_eq!(
        rows[1].fields,
        fields("Grace", "Hopper", "grace@example.com", "Navy")
    );
}

#[tokio::test]
async fn empty_roster_has_no_header() {
    let mut session = RosterSession::new(FakeRosterApi::default());
    session.load().await;
    assert!(session.view.roster.has_loaded());
    assert!(!session.view.roster.shows_header());
}

#[tokio::test]
async fn failed_load_keeps_previous_rows_and_selection() {
    let mut session = loaded_session().await;
    session.view.roster.set_selected(EmployeeId(1), true);
    session.api().fail("list").await;

    session.load().await;

    assert_eq!(session.view.roster.rows().len(), 3);
    assert!(session.view.roster.is_selected(EmployeeId(1)));
    let message = session.view.status.message().expect("banner");
    assert_eq!(message.severity, StatusSeverity::Error);
}

#[tokio::test]
async fn rebuild_clears_selection() {
    let mut session = loaded_session().await;
    session.view.roster.select_all(true);
    assert!(session.view.roster.all_selected());

    session.load().await;

    assert_eq!(session.view.roster.selection_indicator(), None);
}

#[test]
fn selection_only_tracks_rendered_rows() {
    let mut view = RosterViewModel::default();
    view.apply(
        RosterEvent::RosterLoaded(vec![shared::domain::Employee::new(
            EmployeeId(10),
            fields("a", "b", "c", "d"),
        )]),
        Instant::now(),
    );

    assert!(!view.roster.set_selected(EmployeeId(11), true));
    assert!(view.roster.set_selected(EmployeeId(10), true));

    let indicator = view.roster.selection_indicator().expect("indicator");
    assert_eq!(indicator.count, 1);
    assert_eq!(indicator.label(), "Delete Selected (1)");

    view.roster.set_selected(EmployeeId(10), false);
    assert_eq!(view.roster.selection_indicator(), None);
}

#[tokio::test]
async fn empty_identifier_creates_and_populated_identifier_updates() {
    let mut session = loaded_session().await;

    session.view.form.fields = fields("Barbara", "Liskov", "bl@example.com", "PL");
    assert!(matches!(session.view.submit_form(), RosterCommand::Save(SaveTarget::Create(_))));
    session.save().await;
    assert_eq!(
        session.api().calls().await[0],
        Call::Create(fields("Barbara", "Liskov", "bl@example.com", "PL"))
    );
    assert_eq!(session.view.form.employee_id, None);
    assert_eq!(session.view.roster.rows().len(), 4);

    session.api().clear_calls().await;
    session.edit(EmployeeId(3)).await;
    assert_eq!(session.view.form.mode(), FormMode::Edit);
    assert_eq!(session.view.form.title(), "Edit Employee");
    assert_eq!(session.view.form.submit_label(), "Update");

    session.view.form.fields.department = "Computing".into();
    session.save().await;
    assert_eq!(
        session.api().calls().await[1],
        Call::Update(
            EmployeeId(3),
            fields("Alan", "Turing", "alan@example.com", "Computing")
        )
    );
    assert_eq!(session.view.form.mode(), FormMode::Add);
}

#[tokio::test]
async fn failed_save_retains_entered_values() {
    let mut session = loaded_session().await;
    session.api().fail("create").await;
    session.view.form.fields = fields("Ken", "Thompson", "ken@example.com", "Unix");

    session.save().await;

    assert_eq!(session.view.form.fields.first_name, "Ken");
    assert_eq!(
        session.view.status.message().map(|m| m.severity),
        Some(StatusSeverity::Error)
    );
}

#[tokio::test]
async fn reset_restores_add_mode_from_any_mode() {
    let mut session = loaded_session().await;
    session.view.reset_form();
    assert_eq!(session.view.form.title(), "Add Employee");

    session.edit(EmployeeId(1)).await;
    assert_eq!(session.view.form.employee_id, Some(EmployeeId(1)));

    session.view.reset_form();
    assert_eq!(session.view.form.employee_id, None);
    assert_eq!(session.view.form.fields, shared::domain::EmployeeFields::default());
    assert_eq!(session.view.form.title(), "Add Employee");
    assert_eq!(session.view.form.submit_label(), "Save");
}

#[tokio::test]
async fn single_delete_prompts_and_declining_issues_nothing() {
    let mut session = loaded_session().await;
    let mut prompt = RecordingPrompt {
        answer: false,
        questions: Vec::new(),
    };

    let issued = session
        .delete(EmployeeId(2), Confirmation::Prompt(&mut prompt))
        .await;

    assert!(!issued);
    assert_eq!(
        prompt.questions,
        vec!["Are you sure you want to delete this employee?".to_string()]
    );
    assert!(session.api().calls().await.is_empty());

    let issued = session
        .delete(EmployeeId(2), Confirmation::Prompt(&mut FixedAnswer(true)))
        .await;
    assert!(issued);
    assert_eq!(
        session.api().calls().await,
        vec![Call::Delete(EmployeeId(2)), Call::List]
    );
    assert_eq!(
        session.view.status.message().map(|m| m.text.as_str()),
        Some(EMPLOYEE_DELETED)
    );
    assert!(session.view.roster.row(EmployeeId(2)).is_none());
}

#[tokio::test]
async fn zero_selection_never_prompts_opens_dialog_or_requests() {
    let mut session = loaded_session().await;
    let mut prompt = RecordingPrompt {
        answer: true,
        questions: Vec::new(),
    };

    assert!(!session.delete_selected(Confirmation::Prompt(&mut prompt)).await);
    assert!(!session.delete_selected(Confirmation::Dialog).await);

    assert!(prompt.questions.is_empty());
    assert!(session.view.pending_deletion().is_none());
    assert!(session.api().calls().await.is_empty());
}

#[tokio::test]
async fn batch_delete_of_three_reports_count_and_reloads_without_them() {
    let mut session = loaded_session().await;
    session.view.roster.select_all(true);
    let mut prompt = RecordingPrompt {
        answer: true,
        questions: Vec::new(),
    };

    assert!(session.delete_selected(Confirmation::Prompt(&mut prompt)).await);

    assert_eq!(
        prompt.questions,
        vec!["Are you sure you want to delete 3 employee(s)?".to_string()]
    );
    assert_eq!(
        session.view.status.message(),
        Some(&StatusMessage::success("Successfully deleted 3 employee(s)"))
    );
    assert!(session.view.roster.rows().is_empty());
    assert!(session.api().ids().await.is_empty());
}

#[tokio::test]
async fn dialog_confirmation_defers_until_confirmed() {
    let mut session = loaded_session().await;
    session.view.roster.set_selected(EmployeeId(3), true);
    session.view.roster.set_selected(EmployeeId(1), true);

    assert!(!session.delete_selected(Confirmation::Dialog).await);
    let pending = session.view.pending_deletion().expect("dialog open");
    assert_eq!(
        pending,
        &PendingDeletion::Batch(vec![EmployeeId(1), EmployeeId(3)])
    );
    assert_eq!(
        pending.question(),
        "Are you sure you want to delete 2 employee(s)?"
    );
    assert!(session.api().calls().await.is_empty());

    assert!(session.confirm_pending().await);
    assert!(session.view.pending_deletion().is_none());
    assert_eq!(
        session.api().calls().await,
        vec![
            Call::DeleteBatch(vec![EmployeeId(1), EmployeeId(3)]),
            Call::List
        ]
    );
    assert_eq!(session.api().ids().await, vec![EmployeeId(2)]);
}

#[tokio::test]
async fn cancelled_dialog_issues_nothing() {
    let mut session = loaded_session().await;
    session.view.request_delete(EmployeeId(1), Confirmation::Dialog);
    assert!(session.view.pending_deletion().is_some());

    session.view.cancel_pending();

    assert!(!session.confirm_pending().await);
    assert!(session.api().calls().await.is_empty());
}

#[tokio::test]
async fn rejected_batch_shows_error_not_partial_success_and_resyncs() {
    let mut session = loaded_session().await;
    session.view.roster.select_all(true);
    session.api().fail("delete_batch").await;

    session
        .delete_selected(Confirmation::Prompt(&mut FixedAnswer(true)))
        .await;

    assert_eq!(
        session.view.status.message(),
        Some(&StatusMessage::error(BATCH_DELETE_FAILED))
    );
    assert_eq!(session.view.roster.rows().len(), 3);
    assert_eq!(session.view.roster.selection_indicator(), None);
}

#[tokio::test]
async fn switching_servers_drops_old_rows_and_open_dialog() {
    let server_a = FakeRosterApi::seeded();
    let server_b = FakeRosterApi::seeded();
    server_b.fail("list").await;

    let mut view = RosterViewModel::default();
    view.apply_all(run_command(&server_a, RosterCommand::Load).await, Instant::now());
    view.roster.select_all(true);
    assert_eq!(view.request_batch_delete(Confirmation::Dialog), None);
    assert!(view.pending_deletion().is_some());

    view.switch_server();
    view.apply_all(run_command(&server_b, RosterCommand::Load).await, Instant::now());

    assert!(view.roster.rows().is_empty());
    assert!(!view.roster.has_loaded());
    assert!(view.roster.load_failed());
    assert_eq!(view.roster.selection_indicator(), None);
    assert_eq!(view.confirm_pending(), None);
    assert_eq!(server_b.calls().await, vec![Call::List]);
    assert_eq!(server_b.ids().await.len(), 3);
}

#[test]
fn reload_narrows_open_dialog_to_rendered_rows() {
    let row = |id| shared::domain::Employee::new(EmployeeId(id), fields("a", "b", "c", "d"));
    let mut view = RosterViewModel::default();
    view.apply(RosterEvent::RosterLoaded(vec![row(1), row(2), row(3)]), Instant::now());
    view.roster.set_selected(EmployeeId(1), true);
    view.roster.set_selected(EmployeeId(3), true);
    view.request_batch_delete(Confirmation::Dialog);

    view.apply(RosterEvent::RosterLoaded(vec![row(2), row(3)]), Instant::now());
    assert_eq!(
        view.pending_deletion(),
        Some(&PendingDeletion::Batch(vec![EmployeeId(3)]))
    );

    view.apply(RosterEvent::RosterLoaded(vec![row(2)]), Instant::now());
    assert_eq!(view.pending_deletion(), None);

    view.request_delete(EmployeeId(2), Confirmation::Dialog);
    view.apply(RosterEvent::RosterLoaded(Vec::new()), Instant::now());
    assert_eq!(view.confirm_pending(), None);
}

#[test]
fn successful_reload_clears_load_failure() {
    let mut view = RosterViewModel::default();
    view.apply(RosterEvent::RosterLoadFailed, Instant::now());
    assert!(view.roster.load_failed());
    assert!(!view.roster.has_loaded());

    view.apply(RosterEvent::RosterLoaded(Vec::new()), Instant::now());
    assert!(!view.roster.load_failed());
    assert!(view.roster.has_loaded());
}
