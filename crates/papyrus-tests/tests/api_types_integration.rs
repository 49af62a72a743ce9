use papyrus_core::api_types::{
    BatchResponse, SingleExtractResponse, SupportedTypesResponse,
};
use papyrus_core::{ExtractionResult, SUPPORTED_EXTENSIONS};
use papyrus_deck::{DeckRequest, Flashcard};

// ---------------------------------------------------------------------------
// ExtractionResult wire shape
// ---------------------------------------------------------------------------

#[test]
fn success_result_omits_the_error_field() {
    let result = ExtractionResult::success("notes.txt", "hello world");
    let json = serde_json::to_value(&result).expect("failed to serialize ExtractionResult");

    assert_eq!(json["filename"], "notes.txt");
    assert_eq!(json["extracted_text"], "hello world");
    assert_eq!(json["status"], 200);
    assert!(json.get("error").is_none(), "error must be absent on success");
}

#[test]
fn failure_result_omits_the_text_field() {
    let result = ExtractionResult::failure("bad.pdf", "Error processing file bad.pdf: broken", 500);
    let json = serde_json::to_value(&result).expect("failed to serialize ExtractionResult");

    assert_eq!(json["filename"], "bad.pdf");
    assert_eq!(json["status"], 500);
    assert!(json["error"].as_str().unwrap().contains("broken"));
    assert!(json.get("extracted_text").is_none());
}

#[test]
fn batch_response_roundtrip() {
    let response = BatchResponse {
        results: vec![
            ExtractionResult::success("a.txt", "alpha"),
            ExtractionResult::failure("b.bmp", "Unsupported file type: .bmp", 400),
        ],
    };

    let json = serde_json::to_string(&response).expect("failed to serialize BatchResponse");
    let deserialized: BatchResponse =
        serde_json::from_str(&json).expect("failed to deserialize BatchResponse");

    assert_eq!(deserialized.results.len(), 2);
    assert!(deserialized.results[0].is_success());
    assert_eq!(deserialized.results[1].status, 400);
}

#[test]
fn single_extract_response_roundtrip() {
    let response = SingleExtractResponse {
        filename: "report.pdf".to_string(),
        extracted_text: "Q3 Results".to_string(),
    };

    let json = serde_json::to_string(&response).expect("failed to serialize");
    let deserialized: SingleExtractResponse =
        serde_json::from_str(&json).expect("failed to deserialize");
    assert_eq!(deserialized.filename, "report.pdf");
    assert_eq!(deserialized.extracted_text, "Q3 Results");
}

// ---------------------------------------------------------------------------
// Supported-types and deck request shapes
// ---------------------------------------------------------------------------

#[test]
fn supported_types_response_lists_all_seven_extensions() {
    let response = SupportedTypesResponse {
        supported_file_types: SUPPORTED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
    };
    let json = serde_json::to_value(&response).expect("failed to serialize");

    let listed = json["supported_file_types"].as_array().unwrap();
    assert_eq!(listed.len(), 7);
    for ext in [".pdf", ".pptx", ".png", ".jpg", ".jpeg", ".txt", ".docx"] {
        assert!(listed.iter().any(|v| v == ext), "{ext} missing");
    }
}

#[test]
fn deck_request_parses_the_original_wire_shape() {
    let request: DeckRequest = serde_json::from_str(
        r#"{
            "flashcards": [
                {"front": "What is OCR?", "back": "Optical Character Recognition"},
                {"front": "Only a front"}
            ],
            "style": "advanced"
        }"#,
    )
    .expect("failed to parse DeckRequest");

    assert_eq!(request.flashcards.len(), 2);
    assert_eq!(request.flashcards[1].back, "");
    assert_eq!(request.style.as_deref(), Some("advanced"));
}

#[test]
fn flashcard_roundtrip() {
    let card = Flashcard {
        front: "Q".to_string(),
        back: "A".to_string(),
    };
    let json = serde_json::to_string(&card).expect("failed to serialize Flashcard");
    let deserialized: Flashcard = serde_json::from_str(&json).expect("failed to deserialize");
    assert_eq!(deserialized.front, "Q");
    assert_eq!(deserialized.back, "A");
}
