use package_express::input::InputError;
use package_express::lifecycle::{
    ShippingQuoteApplication, WorkflowError, WorkflowOutcome, HEIGHT_PROMPT, LENGTH_PROMPT,
    WEIGHT_PROMPT, WIDTH_PROMPT,
};
use package_express::mock::{MockInput, MockQuote, MockValidator};
use package_express::model::Quote;
use std::io;

fn transcript(output: Vec<u8>) -> String {
    String::from_utf8(output).expect("utf-8 output")
}

/// Workflow with every collaborator mocked.
/// Checks the order of calls and the exact lines written on the happy path.
#[test]
fn test_completed_session_calls_services_in_order() {
    let mut input = MockInput::new();
    input.expect_prompt(WEIGHT_PROMPT).return_value(10.0);
    input.expect_prompt(WIDTH_PROMPT).return_value(11.0);
    input.expect_prompt(HEIGHT_PROMPT).return_value(12.0);
    input.expect_prompt(LENGTH_PROMPT).return_value(13.0);

    let mut validation = MockValidator::new();
    validation.expect_weight(10.0).return_valid();
    validation.expect_dimensions(11.0, 12.0, 13.0).return_valid();

    let mut quote = MockQuote::new();
    quote.expect_quote(10.0, 11.0, 12.0, 13.0).return_quote(171.6);

    let mut app = ShippingQuoteApplication::new(
        input.service(),
        validation.service(),
        quote.service(),
        Vec::new(),
    );

    let outcome = app.run().expect("session should complete");
    assert_eq!(outcome, WorkflowOutcome::Completed(Quote(171.6)));
    assert_eq!(
        transcript(app.into_output()),
        "Welcome to Package Express. Please follow the instructions below.\n\
         Your estimated total for shipping this package is: $171.60\n\
         Thank you!\n"
    );

    input.verify();
    validation.verify();
    quote.verify();
}

#[test]
fn test_weight_rejection_skips_dimensions_and_quote() {
    let mut input = MockInput::new();
    input.expect_prompt(WEIGHT_PROMPT).return_value(60.0);

    let mut validation = MockValidator::new();
    validation.expect_weight(60.0).return_invalid("too heavy");

    // No expectations: any call would panic.
    let quote = MockQuote::new();

    let mut app = ShippingQuoteApplication::new(
        input.service(),
        validation.service(),
        quote.service(),
        Vec::new(),
    );

    let outcome = app.run().unwrap();
    assert_eq!(outcome, WorkflowOutcome::Rejected("too heavy".to_string()));
    assert_eq!(input.prompts(), vec![WEIGHT_PROMPT.to_string()]);
    assert!(transcript(app.into_output()).ends_with("too heavy\n"));

    input.verify();
    validation.verify();
    quote.verify();
}

#[test]
fn test_dimension_rejection_skips_quote() {
    let mut input = MockInput::new();
    input.expect_prompt(WEIGHT_PROMPT).return_value(5.0);
    input.expect_prompt(WIDTH_PROMPT).return_value(20.0);
    input.expect_prompt(HEIGHT_PROMPT).return_value(20.0);
    input.expect_prompt(LENGTH_PROMPT).return_value(20.0);

    let mut validation = MockValidator::new();
    validation.expect_weight(5.0).return_valid();
    validation.expect_dimensions(20.0, 20.0, 20.0).return_invalid("too big");

    let quote = MockQuote::new();

    let mut app = ShippingQuoteApplication::new(
        input.service(),
        validation.service(),
        quote.service(),
        Vec::new(),
    );

    let outcome = app.run().unwrap();
    assert_eq!(outcome, WorkflowOutcome::Rejected("too big".to_string()));
    assert_eq!(
        transcript(app.into_output()),
        "Welcome to Package Express. Please follow the instructions below.\ntoo big\n"
    );

    input.verify();
    validation.verify();
    quote.verify();
}

#[test]
fn test_all_dimensions_are_collected_before_validation() {
    let mut input = MockInput::new();
    input.expect_prompt(WEIGHT_PROMPT).return_value(1.0);
    input.expect_prompt(WIDTH_PROMPT).return_value(2.0);
    input.expect_prompt(HEIGHT_PROMPT).return_value(3.0);
    input.expect_prompt(LENGTH_PROMPT).return_value(4.0);

    let mut validation = MockValidator::new();
    validation.expect_weight(1.0).return_valid();
    validation.expect_dimensions(2.0, 3.0, 4.0).return_invalid("too big");

    let mut app = ShippingQuoteApplication::new(
        input.service(),
        validation.service(),
        MockQuote::new().service(),
        Vec::new(),
    );
    app.run().unwrap();

    assert_eq!(
        input.prompts(),
        vec![WEIGHT_PROMPT, WIDTH_PROMPT, HEIGHT_PROMPT, LENGTH_PROMPT]
    );
    validation.verify();
}

#[test]
fn test_console_failure_aborts_session() {
    let mut input = MockInput::new();
    input.expect_prompt(WEIGHT_PROMPT).return_value(10.0);
    input
        .expect_prompt(WIDTH_PROMPT)
        .return_err(InputError::Io(io::Error::other("stdin unavailable")));

    let mut validation = MockValidator::new();
    validation.expect_weight(10.0).return_valid();

    let mut app = ShippingQuoteApplication::new(
        input.service(),
        validation.service(),
        MockQuote::new().service(),
        Vec::new(),
    );

    let err = app.run().unwrap_err();
    assert!(matches!(err, WorkflowError::Input(InputError::Io(_))));

    input.verify();
    validation.verify();
}
