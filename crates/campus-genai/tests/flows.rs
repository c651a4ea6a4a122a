//! Study-question and enquiry flows against in-process collaborators.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use campus_core::flows::EnquiryInput;
use campus_genai::enquiry::DELIVERY_FAILED_MESSAGE;
use campus_genai::{
    EnquiryError, EnquiryFlow, EnquirySink, GenerationError, PromptRequest, SinkError,
    StudyQuestionFlow, TextGenerator,
};
use pretty_assertions::assert_eq;
use tokio::sync::Notify;

const DOC: &str = "Photosynthesis converts light energy into chemical energy stored in glucose.";

/// Replies from a fixed script, recording every prompt it receives.
#[derive(Default)]
struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, GenerationError>>>,
    prompts: Mutex<Vec<PromptRequest>>,
}

impl ScriptedGenerator {
    fn replying(replies: Vec<Result<String, GenerationError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::default(),
        })
    }

    fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, request: &PromptRequest) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::Malformed("script exhausted".into())))
    }
}

/// Holds every request until released.
struct GatedGenerator {
    gate: Arc<Notify>,
}

#[async_trait]
impl TextGenerator for GatedGenerator {
    fn name(&self) -> &str {
        "gated"
    }

    async fn generate(&self, _request: &PromptRequest) -> Result<String, GenerationError> {
        self.gate.notified().await;
        Ok(r#"{"questions": ["What does photosynthesis produce?"]}"#.to_string())
    }
}

#[tokio::test]
async fn empty_content_never_reaches_the_model() {
    let generator = ScriptedGenerator::replying(vec![]);
    let flow = StudyQuestionFlow::new(generator.clone());
    for content in ["", "   \n\t"] {
        assert!(matches!(
            flow.generate(content).await,
            Err(GenerationError::EmptyContent)
        ));
    }
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn questions_come_back_in_order() {
    let generator = ScriptedGenerator::replying(vec![Ok(
        "```json\n{\"questions\": [\"What is photosynthesis?\", \"Where is glucose stored?\"]}\n```"
            .to_string(),
    )]);
    let flow = StudyQuestionFlow::new(generator.clone()).with_temperature(0.2);

    let output = flow.generate(DOC).await.unwrap();
    assert_eq!(
        output.questions,
        vec!["What is photosynthesis?", "Where is glucose stored?"]
    );

    let prompts = generator.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].prompt.contains(DOC));
    assert!(prompts[0].json_output);
    assert_eq!(prompts[0].temperature, Some(0.2));
}

#[tokio::test]
async fn collaborator_failure_is_surfaced_once() {
    let generator = ScriptedGenerator::replying(vec![Err(GenerationError::Api {
        status: 500,
        message: "internal".into(),
    })]);
    let flow = StudyQuestionFlow::new(generator.clone());

    let err = flow.generate(DOC).await.unwrap_err();
    assert!(err.to_string().contains("internal"));
    assert_eq!(generator.calls(), 1);
    assert!(!flow.is_in_flight(DOC));
}

#[tokio::test]
async fn non_conforming_reply_yields_no_questions() {
    let generator = ScriptedGenerator::replying(vec![
        Ok(r#"{"questions": []}"#.to_string()),
        Ok(r#"{"items": ["Q1"]}"#.to_string()),
        Ok("I cannot help with that.".to_string()),
    ]);
    let flow = StudyQuestionFlow::new(generator);

    assert!(matches!(
        flow.generate(DOC).await,
        Err(GenerationError::Schema(_))
    ));
    assert!(matches!(
        flow.generate(DOC).await,
        Err(GenerationError::Schema(_))
    ));
    assert!(matches!(
        flow.generate(DOC).await,
        Err(GenerationError::Malformed(_))
    ));
}

#[tokio::test]
async fn duplicate_submission_is_refused_while_pending() {
    let gate = Arc::new(Notify::new());
    let flow = Arc::new(StudyQuestionFlow::new(Arc::new(GatedGenerator {
        gate: Arc::clone(&gate),
    })));

    let pending = {
        let flow = Arc::clone(&flow);
        tokio::spawn(async move { flow.generate(DOC).await })
    };
    while !flow.is_in_flight(DOC) {
        tokio::task::yield_now().await;
    }

    assert!(matches!(
        flow.generate(DOC).await,
        Err(GenerationError::AlreadyInFlight)
    ));

    gate.notify_one();
    let output = pending.await.unwrap().unwrap();
    assert_eq!(output.questions.len(), 1);
    assert!(!flow.is_in_flight(DOC));
}

// -- enquiries ----------------------------------------------------------

#[derive(Default)]
struct RecordingSink {
    delivered: Mutex<Vec<EnquiryInput>>,
}

#[async_trait]
impl EnquirySink for RecordingSink {
    async fn deliver(&self, enquiry: &EnquiryInput) -> Result<(), SinkError> {
        self.delivered.lock().unwrap().push(enquiry.clone());
        Ok(())
    }
}

struct FailingSink(AtomicUsize);

#[async_trait]
impl EnquirySink for FailingSink {
    async fn deliver(&self, _enquiry: &EnquiryInput) -> Result<(), SinkError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Err(SinkError("mail server unreachable".into()))
    }
}

fn enquiry() -> EnquiryInput {
    EnquiryInput {
        full_name: "Priya Raman".into(),
        email: "priya@example.com".into(),
        phone: Some("555-123-4567".into()),
        class_interested: "5".into(),
        message: "Is there a waiting list for class 5?".into(),
    }
}

#[tokio::test]
async fn valid_enquiry_is_delivered_and_acknowledged() {
    let sink = Arc::new(RecordingSink::default());
    let flow = EnquiryFlow::new(sink.clone());

    let output = flow.submit(&enquiry()).await.unwrap();
    assert!(output.success);
    assert!(output.message.starts_with("Thank you for your enquiry, Priya Raman."));
    assert!(output.message.contains("regarding class 5"));
    assert_eq!(sink.delivered.lock().unwrap().as_slice(), [enquiry()]);
}

#[tokio::test]
async fn invalid_enquiry_is_not_delivered() {
    let sink = Arc::new(RecordingSink::default());
    let flow = EnquiryFlow::new(sink.clone());
    let bad = EnquiryInput {
        email: "not-an-email".into(),
        message: " ".into(),
        ..enquiry()
    };

    let Err(EnquiryError::Validation(errors)) = flow.submit(&bad).await else {
        panic!("expected a validation error");
    };
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["email", "message"]);
    assert!(sink.delivered.lock().unwrap().is_empty());
}

#[tokio::test]
async fn sink_failure_is_reported_as_unsuccessful() {
    let sink = Arc::new(FailingSink(AtomicUsize::new(0)));
    let flow = EnquiryFlow::new(sink.clone());

    let output = flow.submit(&enquiry()).await.unwrap();
    assert!(!output.success);
    assert_eq!(output.message, DELIVERY_FAILED_MESSAGE);
    assert_eq!(sink.0.load(Ordering::SeqCst), 1);
}
