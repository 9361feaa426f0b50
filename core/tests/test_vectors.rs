//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Multipart request bodies carry a random
//! boundary, so vectors list the expected form fields and the runner checks
//! each one is framed in the body; everything else is compared exactly.
//! Comparing parsed JSON (not raw strings) avoids false negatives from
//! field-ordering differences.

use blog_core::{ApiError, Blog, BlogClient, CreateBlog, HttpMethod, HttpRequest, HttpResponse, UpdateBlog};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> BlogClient {
    BlogClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn load(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap()
}

fn simulated_response(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

/// Check method, path, and multipart field framing of a built form request.
fn check_form_request(name: &str, req: &HttpRequest, expected_req: &serde_json::Value) {
    assert_eq!(
        req.method,
        parse_method(expected_req["method"].as_str().unwrap()),
        "{name}: method"
    );
    assert_eq!(
        req.path,
        format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()),
        "{name}: path"
    );

    let (header, value) = &req.headers[0];
    assert_eq!(header, "content-type", "{name}: header name");
    assert!(
        value.starts_with("multipart/form-data; boundary="),
        "{name}: content type"
    );

    let body = String::from_utf8(req.body.clone().unwrap()).unwrap();
    for field in expected_req["fields"].as_array().unwrap() {
        let arr = field.as_array().unwrap();
        let field_name = arr[0].as_str().unwrap();
        let field_value = arr[1].as_str().unwrap();
        assert!(
            body.contains(&format!("name=\"{field_name}\"\r\n\r\n{field_value}\r\n")),
            "{name}: body missing field {field_name}"
        );
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let vectors = load(include_str!("../../test-vectors/list.json"));

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_list_blogs();
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");
        assert!(req.body.is_none(), "{name}: body should be None");

        // Verify parse
        let blogs = c.parse_list_blogs(simulated_response(case)).unwrap();
        let expected: Vec<Blog> = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(blogs, expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let vectors = load(include_str!("../../test-vectors/create.json"));

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = CreateBlog {
            title: case["input"]["title"].as_str().unwrap().to_string(),
            content: case["input"]["content"].as_str().unwrap().to_string(),
            image_header: None,
        };

        // Verify build
        let req = c.build_create_blog(&input);
        check_form_request(name, &req, &case["expected_request"]);

        // Verify parse
        let blog = c.parse_create_blog(simulated_response(case)).unwrap();
        let expected: Blog = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(blog, expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    let vectors = load(include_str!("../../test-vectors/update.json"));

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();
        let input = UpdateBlog {
            title: case["input"]["title"].as_str().map(str::to_string),
            content: case["input"]["content"].as_str().map(str::to_string),
            image_header: None,
        };

        // Verify build
        let req = c.build_update_blog(id, &input);
        check_form_request(name, &req, &case["expected_request"]);

        // Verify parse
        let result = c.parse_update_blog(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "NotFound" => assert!(matches!(err, ApiError::NotFound), "{name}: expected NotFound"),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            let blog = result.unwrap();
            let expected: Blog = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(blog, expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let vectors = load(include_str!("../../test-vectors/delete.json"));

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_delete_blog(id);
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");
        assert!(req.body.is_none(), "{name}: body should be None");

        // Verify parse
        let result = c.parse_delete_blog(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "NotFound" => assert!(matches!(err, ApiError::NotFound), "{name}: expected NotFound"),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            assert!(result.is_ok(), "{name}: expected success");
        }
    }
}
