//! Form submission with server-side validation handling.
//!
//! [`FormMutation`] wraps the call that submits a form. On success it
//! invalidates cached queries, shows a message, redirects and runs a
//! callback. On failure it puts Laravel field errors back on the form and
//! shows the 422 summary.

use crate::{AxiosAdapter, EnvelopeAdapter, FieldError, FormError, Result};
use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use omnify_i18n::{MessageCatalog, TemplateParams};
use omnify_log::debug;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// The wrapped submit call. Errors are the HTTP client's error value.
pub type MutationFn<T, R> =
    Arc<dyn Fn(T) -> BoxFuture<'static, std::result::Result<R, Value>> + Send + Sync>;

/// Turns a message key into display text.
pub type Translate = Arc<dyn Fn(&str) -> String + Send + Sync>;

type SuccessCallback<R> = Arc<dyn Fn(&R) + Send + Sync>;
type ErrorCallback = Arc<dyn Fn(&FormError) + Send + Sync>;

/// The form receiving server-side field errors.
pub trait FormSink: Send + Sync {
    fn set_fields(&self, fields: &[FieldError]);
}

/// Toast-style user notifications.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Client-side query cache.
#[async_trait]
pub trait QueryInvalidator: Send + Sync {
    /// Mark every query under `key` as stale.
    async fn invalidate(&self, key: &[Value]);
}

pub trait Navigator: Send + Sync {
    fn push(&self, path: &str);
}

/// Decrements the pending count when the mutation settles or is dropped.
struct PendingGuard<'a>(&'a AtomicUsize);

impl<'a> PendingGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// A form submission with success and error handling attached.
///
/// # Examples
///
/// ```rust,ignore
/// let mutation = FormMutation::new(|data: Value| async move { api.post("/api/customers", data).await })
///     .form(form.clone())
///     .notifier(toasts.clone())
///     .invalidator(query_client.clone())
///     .invalidate_keys(vec![vec![json!("customers")]])
///     .success_message("messages.saved")
///     .redirect_to("/customers")
///     .navigator(router.clone());
///
/// mutation.mutate(json!({"name": "Taro"})).await?;
/// ```
pub struct FormMutation<T, R> {
    mutation_fn: MutationFn<T, R>,
    form: Option<Arc<dyn FormSink>>,
    notifier: Option<Arc<dyn Notifier>>,
    invalidator: Option<Arc<dyn QueryInvalidator>>,
    invalidate_keys: Vec<Vec<Value>>,
    success_message: Option<String>,
    redirect_to: Option<String>,
    navigator: Option<Arc<dyn Navigator>>,
    translate: Option<Translate>,
    on_success: Option<SuccessCallback<R>>,
    on_error: Option<ErrorCallback>,
    adapter: Arc<dyn EnvelopeAdapter>,
    pending: Arc<AtomicUsize>,
}

impl<T, R> FormMutation<T, R>
where
    T: Send + 'static,
    R: Send + 'static,
{
    pub fn new<F, Fut>(mutation_fn: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<R, Value>> + Send + 'static,
    {
        Self {
            mutation_fn: Arc::new(move |data| mutation_fn(data).boxed()),
            form: None,
            notifier: None,
            invalidator: None,
            invalidate_keys: Vec::new(),
            success_message: None,
            redirect_to: None,
            navigator: None,
            translate: None,
            on_success: None,
            on_error: None,
            adapter: Arc::new(AxiosAdapter),
            pending: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn form(mut self, form: Arc<dyn FormSink>) -> Self {
        self.form = Some(form);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn invalidator(mut self, invalidator: Arc<dyn QueryInvalidator>) -> Self {
        self.invalidator = Some(invalidator);
        self
    }

    /// Query keys to invalidate after a successful submit.
    pub fn invalidate_keys(mut self, keys: Vec<Vec<Value>>) -> Self {
        self.invalidate_keys = keys;
        self
    }

    /// Shown on success, translated first when a translator is set.
    pub fn success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self
    }

    /// Redirect target. Ignored unless a navigator is also set.
    pub fn redirect_to(mut self, path: impl Into<String>) -> Self {
        self.redirect_to = Some(path.into());
        self
    }

    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    pub fn translate<F>(mut self, translate: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.translate = Some(Arc::new(translate));
        self
    }

    /// Translate the success message through a catalog.
    pub fn with_catalog(self, catalog: MessageCatalog) -> Self {
        self.translate(move |key| catalog.resolve(key, &TemplateParams::new()))
    }

    pub fn on_success<F>(mut self, callback: F) -> Self
    where
        F: Fn(&R) + Send + Sync + 'static,
    {
        self.on_success = Some(Arc::new(callback));
        self
    }

    pub fn on_error<F>(mut self, callback: F) -> Self
    where
        F: Fn(&FormError) + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(callback));
        self
    }

    /// How to read the client's error values. Defaults to [`AxiosAdapter`].
    pub fn adapter(mut self, adapter: impl EnvelopeAdapter + 'static) -> Self {
        self.adapter = Arc::new(adapter);
        self
    }

    /// Whether a submit is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst) > 0
    }

    /// Submit `data` and run the success or error handling.
    pub async fn mutate(&self, data: T) -> Result<R> {
        let outcome = {
            let _pending = PendingGuard::enter(&self.pending);
            (self.mutation_fn)(data).await
        };

        match outcome {
            Ok(result) => {
                self.handle_success(&result).await;
                Ok(result)
            }
            Err(raw) => {
                let error = self.handle_error(raw);
                Err(error)
            }
        }
    }

    async fn handle_success(&self, result: &R) {
        if let Some(invalidator) = &self.invalidator {
            for key in &self.invalidate_keys {
                invalidator.invalidate(key).await;
            }
        }

        let message = self.success_message.as_deref().filter(|m| !m.is_empty());
        if let (Some(message), Some(notifier)) = (message, &self.notifier) {
            let text = match &self.translate {
                Some(translate) => translate(message),
                None => message.to_string(),
            };
            notifier.success(&text);
        }

        if let (Some(path), Some(navigator)) = (&self.redirect_to, &self.navigator) {
            debug!(target: "omnify::forms", "redirecting to {}", path);
            navigator.push(path);
        }

        if let Some(callback) = &self.on_success {
            callback(result);
        }
    }

    fn handle_error(&self, raw: Value) -> FormError {
        let envelope = self.adapter.parse(&raw);
        let fields = envelope.field_errors();
        let summary = envelope.summary_message().filter(|m| !m.is_empty());

        if !fields.is_empty() {
            debug!(target: "omnify::forms", "server rejected {} field(s)", fields.len());
            if let Some(form) = &self.form {
                form.set_fields(&fields);
            }
        }

        if let (Some(message), Some(notifier)) = (&summary, &self.notifier) {
            notifier.error(message);
        }

        let error = if fields.is_empty() && summary.is_none() {
            FormError::Request(raw)
        } else {
            FormError::Validation { summary, fields, raw }
        };

        if let Some(callback) = &self.on_error {
            callback(&error);
        }

        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use serde_json::json;

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<String>>,
    }

    impl Recorder {
        fn record(&self, event: impl Into<String>) {
            self.events.lock().push(event.into());
        }

        fn events(&self) -> Vec<String> {
            self.events.lock().clone()
        }
    }

    impl FormSink for Recorder {
        fn set_fields(&self, fields: &[FieldError]) {
            for field in fields {
                self.record(format!("field {} {}", field.path, field.messages.join("|")));
            }
        }
    }

    impl Notifier for Recorder {
        fn success(&self, message: &str) {
            self.record(format!("success {}", message));
        }

        fn error(&self, message: &str) {
            self.record(format!("error {}", message));
        }
    }

    #[async_trait]
    impl QueryInvalidator for Recorder {
        async fn invalidate(&self, key: &[Value]) {
            self.record(format!("invalidate {}", Value::Array(key.to_vec())));
        }
    }

    impl Navigator for Recorder {
        fn push(&self, path: &str) {
            self.record(format!("push {}", path));
        }
    }

    fn rejected() -> Value {
        json!({
            "response": {
                "status": 422,
                "data": {
                    "message": "The name field is required.",
                    "errors": {"name": ["The name field is required."]}
                }
            }
        })
    }

    #[tokio::test]
    async fn test_success_flow_order() {
        let recorder = Arc::new(Recorder::default());
        let mutation = FormMutation::new(|n: u32| async move { Ok::<_, Value>(n * 2) })
            .notifier(recorder.clone())
            .invalidator(recorder.clone())
            .invalidate_keys(vec![vec![json!("customers")], vec![json!("stats"), json!(1)]])
            .success_message("Saved")
            .redirect_to("/customers")
            .navigator(recorder.clone());

        assert_eq!(mutation.mutate(21).await.unwrap(), 42);
        assert_eq!(
            recorder.events(),
            vec![
                r#"invalidate ["customers"]"#,
                r#"invalidate ["stats",1]"#,
                "success Saved",
                "push /customers",
            ]
        );
        assert!(!mutation.is_pending());
    }

    #[tokio::test]
    async fn test_redirect_needs_navigator() {
        let recorder = Arc::new(Recorder::default());
        let mutation = FormMutation::new(|_: ()| async { Ok::<_, Value>(()) })
            .notifier(recorder.clone())
            .redirect_to("/customers");

        mutation.mutate(()).await.unwrap();
        assert!(recorder.events().is_empty());
    }

    #[tokio::test]
    async fn test_success_message_translated() {
        let recorder = Arc::new(Recorder::default());
        let mutation = FormMutation::new(|_: ()| async { Ok::<_, Value>(()) })
            .notifier(recorder.clone())
            .success_message("messages.saved")
            .translate(|key| format!("t({})", key));

        mutation.mutate(()).await.unwrap();
        assert_eq!(recorder.events(), vec!["success t(messages.saved)"]);
    }

    #[tokio::test]
    async fn test_validation_failure() {
        let recorder = Arc::new(Recorder::default());
        let seen = Arc::new(Mutex::new(None));
        let seen_in_callback = seen.clone();

        let mutation = FormMutation::new(|_: ()| async { Err::<(), _>(rejected()) })
            .form(recorder.clone())
            .notifier(recorder.clone())
            .on_error(move |e| *seen_in_callback.lock() = Some(e.is_validation()));

        let error = mutation.mutate(()).await.unwrap_err();
        assert!(error.is_validation());
        assert_eq!(error.to_string(), "The name field is required.");
        assert_eq!(error.field_errors().len(), 1);
        assert_eq!(
            recorder.events(),
            vec![
                "field name The name field is required.",
                "error The name field is required.",
            ]
        );
        assert_eq!(*seen.lock(), Some(true));
    }

    #[tokio::test]
    async fn test_blank_messages_are_not_shown() {
        let recorder = Arc::new(Recorder::default());
        let mutation = FormMutation::new(|ok: bool| async move {
            if ok {
                Ok(())
            } else {
                Err(json!({"response": {"status": 422, "data": {"message": ""}}}))
            }
        })
        .notifier(recorder.clone())
        .success_message("");

        let error = mutation.mutate(false).await.unwrap_err();
        assert!(matches!(error, FormError::Request(_)));
        assert!(!error.is_validation());

        mutation.mutate(true).await.unwrap();
        assert!(recorder.events().is_empty());
    }

    #[tokio::test]
    async fn test_blank_summary_keeps_field_errors() {
        let recorder = Arc::new(Recorder::default());
        let mutation = FormMutation::new(|_: ()| async {
            Err::<(), _>(json!({
                "response": {
                    "status": 422,
                    "data": {"message": "", "errors": {"email": ["Taken"]}}
                }
            }))
        })
        .form(recorder.clone())
        .notifier(recorder.clone());

        let error = mutation.mutate(()).await.unwrap_err();
        assert!(matches!(error, FormError::Validation { summary: None, .. }));
        assert_eq!(error.to_string(), "validation failed");
        assert_eq!(recorder.events(), vec!["field email Taken"]);
    }

    #[tokio::test]
    async fn test_plain_failure_touches_nothing() {
        let recorder = Arc::new(Recorder::default());
        let mutation = FormMutation::new(|_: ()| async {
            Err::<(), _>(json!({"response": {"status": 500, "data": {"message": "Server Error"}}}))
        })
        .form(recorder.clone())
        .notifier(recorder.clone());

        let error = mutation.mutate(()).await.unwrap_err();
        assert!(matches!(error, FormError::Request(_)));
        assert!(error.field_errors().is_empty());
        assert!(recorder.events().is_empty());
    }

    #[tokio::test]
    async fn test_on_success_receives_result() {
        let seen = Arc::new(Mutex::new(None));
        let seen_in_callback = seen.clone();
        let mutation = FormMutation::new(|name: String| async move { Ok::<_, Value>(name.len()) })
            .on_success(move |len| *seen_in_callback.lock() = Some(*len));

        mutation.mutate("Taro".to_string()).await.unwrap();
        assert_eq!(*seen.lock(), Some(4));
    }
}
