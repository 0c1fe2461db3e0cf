use std::sync::Arc;

use iced::{Element, Task};

use crate::{
    api::{Api, ApiError, RegisterUserRequest},
    app::{error::Error, message::Message, state::State, view},
    notify::Notifier,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The not-yet-persisted registration record under edit.
///
/// Each edit replaces the draft wholesale with exactly one attribute
/// overridden. The draft is never reset after a submission attempt, so
/// partially entered data survives a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub address: String,
    pub pincode: String,
    pub gender: Option<Gender>,
    pub age: String,
    /// Optional, excluded from the completeness check.
    pub favorites: String,
}

impl RegistrationDraft {
    pub fn with_field(&self, field: &str, value: String) -> Self {
        let mut draft = self.clone();
        match field {
            "name" => draft.name = value,
            "email" => draft.email = value,
            "password" => draft.password = value,
            "confirm_password" => draft.confirm_password = value,
            "phone" => draft.phone = value,
            "address" => draft.address = value,
            "pincode" => draft.pincode = value,
            "age" => draft.age = value,
            "favorites" => draft.favorites = value,
            _ => tracing::warn!("unknown registration field: {}", field),
        }
        draft
    }

    pub fn with_gender(&self, gender: Gender) -> Self {
        let mut draft = self.clone();
        draft.gender = Some(gender);
        draft
    }

    /// Whether any of the nine required attributes is empty or unset.
    pub fn missing_required(&self) -> bool {
        self.name.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
            || self.phone.is_empty()
            || self.address.is_empty()
            || self.pincode.is_empty()
            || self.gender.is_none()
            || self.age.is_empty()
    }

    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }

    fn to_request(&self) -> RegisterUserRequest {
        RegisterUserRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            pincode: self.pincode.clone(),
            gender: self
                .gender
                .map(|g| g.as_str().to_string())
                .unwrap_or_default(),
            age: self.age.clone(),
            favorites: self.favorites.clone(),
        }
    }
}

/// Explicit submission state machine. `Succeeded` and `Failed` only record
/// the last attempt's outcome: both behave as `Idle` for further input, and
/// a new submit is accepted from any state (there is deliberately no
/// double-submit guard).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

pub struct RegisterPanel {
    draft: RegistrationDraft,
    password_revealed: bool,
    confirm_revealed: bool,
    submit: SubmitState,
}

impl RegisterPanel {
    pub fn new() -> Self {
        Self {
            draft: RegistrationDraft::default(),
            password_revealed: false,
            confirm_revealed: false,
            submit: SubmitState::Idle,
        }
    }
}

impl Default for RegisterPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn submit_error_message(error: &Error) -> String {
    if let Error::Api(ApiError::NotSuccess {
        message: Some(message),
        ..
    }) = error
    {
        message.clone()
    } else {
        "Error submitting form.".to_string()
    }
}

impl State for RegisterPanel {
    fn view(&self) -> Element<'_, view::Message> {
        view::register::register_view(
            &self.draft,
            self.password_revealed,
            self.confirm_revealed,
            &self.submit,
        )
    }

    fn update(
        &mut self,
        api: Arc<dyn Api>,
        notifier: &dyn Notifier,
        message: Message,
    ) -> Task<Message> {
        match message {
            Message::View(view::Message::Register(msg)) => match msg {
                view::RegisterMessage::FieldEdited(field, value) => {
                    self.draft = self.draft.with_field(field, value);
                    self.submit = SubmitState::Idle;
                    Task::none()
                }
                view::RegisterMessage::GenderSelected(gender) => {
                    self.draft = self.draft.with_gender(gender);
                    self.submit = SubmitState::Idle;
                    Task::none()
                }
                view::RegisterMessage::TogglePasswordVisibility => {
                    self.password_revealed = !self.password_revealed;
                    Task::none()
                }
                view::RegisterMessage::ToggleConfirmVisibility => {
                    self.confirm_revealed = !self.confirm_revealed;
                    Task::none()
                }
                view::RegisterMessage::Submit => {
                    self.submit = SubmitState::Validating;
                    if self.draft.missing_required() {
                        self.submit = SubmitState::Failed;
                        notifier.error("All fields are required!".to_string());
                        return Task::none();
                    }
                    if !self.draft.passwords_match() {
                        self.submit = SubmitState::Failed;
                        notifier.error("Passwords do not match!".to_string());
                        return Task::none();
                    }
                    self.submit = SubmitState::Submitting;
                    let request = self.draft.to_request();
                    Task::perform(
                        async move { api.register_user(request).await.map_err(Error::from) },
                        Message::Registered,
                    )
                }
            },
            Message::Registered(res) => {
                match res {
                    Ok(()) => {
                        self.submit = SubmitState::Succeeded;
                        notifier.success("User registration completed successfully".to_string());
                    }
                    Err(e) => {
                        tracing::error!("user registration failed: {}", e);
                        self.submit = SubmitState::Failed;
                        notifier.error(submit_error_message(&e));
                    }
                }
                Task::none()
            }
            _ => Task::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        notify::{Level, Notification},
        utils::{
            mock::{Api as MockApi, Recorder},
            sandbox::Sandbox,
        },
    };
    use serde_json::json;

    fn complete_draft() -> RegistrationDraft {
        RegistrationDraft {
            name: "Ishmael".to_string(),
            email: "ishmael@pequod.sea".to_string(),
            password: "call-me".to_string(),
            confirm_password: "call-me".to_string(),
            phone: "0123456789".to_string(),
            address: "Nantucket".to_string(),
            pincode: "02554".to_string(),
            gender: Some(Gender::Male),
            age: "28".to_string(),
            favorites: "whaling".to_string(),
        }
    }

    fn panel_with(draft: RegistrationDraft) -> RegisterPanel {
        RegisterPanel {
            draft,
            ..RegisterPanel::new()
        }
    }

    #[tokio::test]
    async fn any_missing_required_field_blocks_submission() {
        let string_fields = [
            "name",
            "email",
            "password",
            "confirm_password",
            "phone",
            "address",
            "pincode",
            "age",
        ];
        for field in string_fields {
            // An empty script: any request issued would panic the mock.
            let api = Arc::new(MockApi::new(vec![]));
            let notifier = Arc::new(Recorder::default());
            let draft = complete_draft().with_field(field, String::new());
            let sandbox = Sandbox::new(panel_with(draft));
            let sandbox = sandbox
                .update(
                    api,
                    notifier.clone(),
                    Message::View(view::Message::Register(view::RegisterMessage::Submit)),
                )
                .await;
            assert_eq!(sandbox.state().submit, SubmitState::Failed, "{}", field);
            assert_eq!(
                notifier.notifications(),
                vec![Notification::error("All fields are required!".to_string())],
                "{}",
                field
            );
        }

        // Unset gender counts as missing too.
        let api = Arc::new(MockApi::new(vec![]));
        let notifier = Arc::new(Recorder::default());
        let mut draft = complete_draft();
        draft.gender = None;
        let sandbox = Sandbox::new(panel_with(draft));
        let sandbox = sandbox
            .update(
                api,
                notifier.clone(),
                Message::View(view::Message::Register(view::RegisterMessage::Submit)),
            )
            .await;
        assert_eq!(sandbox.state().submit, SubmitState::Failed);
        assert_eq!(
            notifier.notifications(),
            vec![Notification::error("All fields are required!".to_string())]
        );
    }

    #[tokio::test]
    async fn empty_favorites_does_not_block_submission() {
        let draft = complete_draft().with_field("favorites", String::new());
        let api = Arc::new(MockApi::new(vec![(
            Some(json!({"method": "register_user", "params": draft.to_request()})),
            Ok(json!(null)),
        )]));
        let notifier = Arc::new(Recorder::default());
        let sandbox = Sandbox::new(panel_with(draft));
        let sandbox = sandbox
            .update(
                api.clone(),
                notifier.clone(),
                Message::View(view::Message::Register(view::RegisterMessage::Submit)),
            )
            .await;
        assert_eq!(sandbox.state().submit, SubmitState::Succeeded);
        assert!(api.is_exhausted());
    }

    #[tokio::test]
    async fn password_mismatch_blocks_submission() {
        let api = Arc::new(MockApi::new(vec![]));
        let notifier = Arc::new(Recorder::default());
        let draft = complete_draft().with_field("confirm_password", "call-me-not".to_string());
        let sandbox = Sandbox::new(panel_with(draft));
        let sandbox = sandbox
            .update(
                api,
                notifier.clone(),
                Message::View(view::Message::Register(view::RegisterMessage::Submit)),
            )
            .await;
        assert_eq!(sandbox.state().submit, SubmitState::Failed);
        assert_eq!(
            notifier.notifications(),
            vec![Notification::error("Passwords do not match!".to_string())]
        );
    }

    #[tokio::test]
    async fn complete_draft_issues_one_request_with_all_ten_fields() {
        let draft = complete_draft();
        let api = Arc::new(MockApi::new(vec![(
            Some(json!({"method": "register_user", "params": {
                "name": "Ishmael",
                "email": "ishmael@pequod.sea",
                "password": "call-me",
                "confirmPassword": "call-me",
                "phone": "0123456789",
                "address": "Nantucket",
                "pincode": "02554",
                "gender": "Male",
                "age": "28",
                "favorites": "whaling",
            }})),
            Ok(json!(null)),
        )]));
        let notifier = Arc::new(Recorder::default());
        let sandbox = Sandbox::new(panel_with(draft.clone()));
        let sandbox = sandbox
            .update(
                api.clone(),
                notifier.clone(),
                Message::View(view::Message::Register(view::RegisterMessage::Submit)),
            )
            .await;

        assert!(api.is_exhausted());
        assert_eq!(sandbox.state().submit, SubmitState::Succeeded);
        assert_eq!(
            notifier.notifications(),
            vec![Notification::success(
                "User registration completed successfully".to_string()
            )]
        );
        // Fields survive the attempt, and no navigation happens.
        assert_eq!(sandbox.state().draft, draft);
        assert!(!sandbox
            .messages()
            .iter()
            .any(|m| matches!(m, Message::View(view::Message::Menu(_)))));
    }

    #[tokio::test]
    async fn server_message_is_surfaced_verbatim() {
        let api = Arc::new(MockApi::new(vec![(
            None,
            Err(ApiError::NotSuccess {
                status: 409,
                message: Some("Email already registered".to_string()),
            }),
        )]));
        let notifier = Arc::new(Recorder::default());
        let sandbox = Sandbox::new(panel_with(complete_draft()));
        let sandbox = sandbox
            .update(
                api,
                notifier.clone(),
                Message::View(view::Message::Register(view::RegisterMessage::Submit)),
            )
            .await;
        assert_eq!(sandbox.state().submit, SubmitState::Failed);
        assert_eq!(
            notifier.notifications(),
            vec![Notification::error("Email already registered".to_string())]
        );
    }

    #[tokio::test]
    async fn request_failure_without_message_is_generic() {
        let api = Arc::new(MockApi::new(vec![(
            None,
            Err(ApiError::Transport("connection refused".to_string())),
        )]));
        let notifier = Arc::new(Recorder::default());
        let sandbox = Sandbox::new(panel_with(complete_draft()));
        let sandbox = sandbox
            .update(
                api,
                notifier.clone(),
                Message::View(view::Message::Register(view::RegisterMessage::Submit)),
            )
            .await;
        assert_eq!(
            notifier.notifications(),
            vec![Notification::error("Error submitting form.".to_string())]
        );
        assert_eq!(notifier.notifications()[0].level, Level::Error);
    }

    #[tokio::test]
    async fn visibility_toggles_are_independent() {
        let api = Arc::new(MockApi::new(vec![]));
        let notifier = Arc::new(Recorder::default());
        let sandbox = Sandbox::new(RegisterPanel::new());

        let sandbox = sandbox
            .update(
                api.clone(),
                notifier.clone(),
                Message::View(view::Message::Register(
                    view::RegisterMessage::TogglePasswordVisibility,
                )),
            )
            .await;
        assert!(sandbox.state().password_revealed);
        assert!(!sandbox.state().confirm_revealed);

        let sandbox = sandbox
            .update(
                api.clone(),
                notifier.clone(),
                Message::View(view::Message::Register(
                    view::RegisterMessage::ToggleConfirmVisibility,
                )),
            )
            .await;
        assert!(sandbox.state().password_revealed);
        assert!(sandbox.state().confirm_revealed);

        let sandbox = sandbox
            .update(
                api,
                notifier,
                Message::View(view::Message::Register(
                    view::RegisterMessage::TogglePasswordVisibility,
                )),
            )
            .await;
        assert!(!sandbox.state().password_revealed);
        assert!(sandbox.state().confirm_revealed);
    }

    #[tokio::test]
    async fn field_edit_overwrites_exactly_one_attribute() {
        let api = Arc::new(MockApi::new(vec![]));
        let notifier = Arc::new(Recorder::default());
        let draft = complete_draft();
        let sandbox = Sandbox::new(panel_with(draft.clone()));
        let sandbox = sandbox
            .update(
                api,
                notifier,
                Message::View(view::Message::Register(
                    view::RegisterMessage::FieldEdited("email", "queequeg@pequod.sea".to_string()),
                )),
            )
            .await;
        let edited = sandbox.state().draft.clone();
        assert_eq!(edited.email, "queequeg@pequod.sea");
        assert_eq!(
            RegistrationDraft {
                email: draft.email.clone(),
                ..edited
            },
            draft
        );
    }
}
