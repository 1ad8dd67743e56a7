//! Typed rendering of operations into hurl request blocks.
//!
//! Each operation variant has its own renderer taking exactly the fields
//! it needs. File paths are written verbatim: a path containing hurl
//! syntax (`{{`, `;`, newlines) is not escaped.

use serde_json::{json, Value};

use crate::config::{ScenarioConfig, AUTH_TOKEN_VAR, HOST_NAME_VAR, RELEASE_SLUG, SCHEME_VAR, SERIES_VAR};

use super::operation::{revision_url_var, ChangeKind, Operation};

const JSON_CONTENT_TYPE: &str = "application/json";
const CSV_CONTENT_TYPE: &str = "text/csv";
const CREATED: u16 = 201;

/// Render a single operation as a hurl block (no surrounding blank lines).
pub fn render_operation(op: &Operation, config: &ScenarioConfig) -> String {
    match op {
        Operation::DatasetSetup { schema_file } => render_dataset_setup(schema_file, config),
        Operation::RevisionOpen { revision } => render_revision_open(*revision, config),
        Operation::ChangeApply { kind, file, revision } => {
            render_change_apply(*kind, file, *revision, config)
        }
    }
}

/// Dataset, release and schema upload requests.
pub fn render_dataset_setup(schema_file: &str, config: &ScenarioConfig) -> String {
    let dataset_url = dataset_url(config);
    let release_url = release_url(config);

    let dataset = json_request(
        "PUT",
        &dataset_url,
        config,
        &metadata("Test Dataset", "A very simple test"),
        &["dataset: jsonpath \"$['dh:baseEntity']\"".to_string()],
    );
    let release = json_request(
        "PUT",
        &release_url,
        config,
        &metadata("Test Release", "A very simple Release"),
        &[],
    );
    let schema = format!(
        "POST {url}/schema\n\
         Content-Type: {content_type}\n\
         {auth}\
         file,{schema_file};\n\
         \n\
         HTTP {status}",
        url = release_url,
        content_type = JSON_CONTENT_TYPE,
        auth = auth_header(config),
        schema_file = schema_file,
        status = CREATED,
    );

    [dataset, release, schema].join("\n\n")
}

/// Revision creation, capturing its `Location` as `revision{N}_url`.
pub fn render_revision_open(revision: u32, config: &ScenarioConfig) -> String {
    json_request(
        "POST",
        &format!("{}/revisions", release_url(config)),
        config,
        &metadata(&format!("Rev {}", revision), "A test revision"),
        &[format!("{}: header \"Location\"", revision_url_var(revision))],
    )
}

/// Change upload against the captured URL of `revision`.
pub fn render_change_apply(
    kind: ChangeKind,
    file: &str,
    revision: u32,
    config: &ScenarioConfig,
) -> String {
    format!(
        "POST {base}{revision_url}/{kind}\n\
         Content-Type: {content_type}\n\
         {auth}\
         [QueryStringParams]\n\
         title: changes {kind}\n\
         description: change for {series}\n\
         format: {content_type}\n\
         file,{file};\n\
         \n\
         HTTP {status}",
        base = config.base_url(),
        revision_url = variable(&revision_url_var(revision)),
        kind = kind,
        content_type = CSV_CONTENT_TYPE,
        auth = auth_header(config),
        series = variable(SERIES_VAR),
        file = file,
        status = CREATED,
    )
}

/// Comment documenting the variables the script expects.
pub fn render_run_comment(config: &ScenarioConfig) -> String {
    let mut comment = format!("# run: hurl FILE_NAME --variable {}=series-01", SERIES_VAR);
    if config.use_variable_host {
        comment.push_str(&format!(
            " --variable {}=http --variable {}=localhost:3000",
            SCHEME_VAR, HOST_NAME_VAR
        ));
    }
    if config.include_auth_header {
        comment.push_str(&format!(" --variable {}=AUTH_TOKEN", AUTH_TOKEN_VAR));
    }
    comment
}

fn variable(name: &str) -> String {
    format!("{{{{{}}}}}", name)
}

fn dataset_url(config: &ScenarioConfig) -> String {
    format!("{}/data/{}", config.base_url(), variable(SERIES_VAR))
}

fn release_url(config: &ScenarioConfig) -> String {
    format!("{}/releases/{}", dataset_url(config), RELEASE_SLUG)
}

fn metadata(title: &str, description: &str) -> Value {
    json!({
        "dcterms:title": title,
        "dcterms:description": description,
    })
}

/// Header line (with newline), or nothing when auth is off.
fn auth_header(config: &ScenarioConfig) -> String {
    if config.include_auth_header {
        format!("Authorization: {}\n", variable(AUTH_TOKEN_VAR))
    } else {
        String::new()
    }
}

fn json_request(
    method: &str,
    url: &str,
    config: &ScenarioConfig,
    body: &Value,
    captures: &[String],
) -> String {
    let mut block = format!(
        "{method} {url}\n\
         Accept: {content_type}\n\
         Content-Type: {content_type}\n\
         {auth}\
         {body:#}\n\
         \n\
         HTTP {status}",
        method = method,
        url = url,
        content_type = JSON_CONTENT_TYPE,
        auth = auth_header(config),
        body = body,
        status = CREATED,
    );
    if !captures.is_empty() {
        block.push_str("\n[Captures]");
        for capture in captures {
            block.push('\n');
            block.push_str(capture);
        }
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_setup_templated() {
        let block = render_dataset_setup("schema.json", &ScenarioConfig::templated());

        assert!(block.starts_with("PUT {{scheme}}://{{host_name}}/data/{{series}}\n"));
        assert!(block.contains("PUT {{scheme}}://{{host_name}}/data/{{series}}/releases/release-1\n"));
        assert!(block.contains("POST {{scheme}}://{{host_name}}/data/{{series}}/releases/release-1/schema\n"));
        assert!(block.contains("file,schema.json;\n"));
        assert!(block.contains("dataset: jsonpath \"$['dh:baseEntity']\""));
        assert_eq!(block.matches("Authorization: {{auth_token}}").count(), 3);
        assert_eq!(block.matches("HTTP 201").count(), 3);
    }

    #[test]
    fn test_dataset_setup_local_without_auth() {
        let block = render_dataset_setup("schema.json", &ScenarioConfig::local());

        assert!(block.starts_with("PUT http://localhost:3000/data/{{series}}\n"));
        assert!(!block.contains("Authorization"));
        assert!(!block.contains("{{scheme}}"));
    }

    #[test]
    fn test_json_bodies_are_valid() {
        let block = render_revision_open(3, &ScenarioConfig::templated());
        let start = block.find("\n{").unwrap() + 1;
        let end = block.find("\n}").unwrap() + 1;
        let body: Value = serde_json::from_str(&block[start..=end]).unwrap();
        assert_eq!(body["dcterms:title"], "Rev 3");
    }

    #[test]
    fn test_revision_open_captures_location() {
        let block = render_revision_open(2, &ScenarioConfig::local());

        assert!(block.starts_with("POST http://localhost:3000/data/{{series}}/releases/release-1/revisions\n"));
        assert!(block.ends_with("HTTP 201\n[Captures]\nrevision2_url: header \"Location\""));
    }

    #[test]
    fn test_change_apply_references_revision_capture() {
        let block = render_change_apply(
            ChangeKind::Retractions,
            "file2.csv",
            2,
            &ScenarioConfig::templated(),
        );

        assert!(block.starts_with("POST {{scheme}}://{{host_name}}{{revision2_url}}/retractions\n"));
        assert!(block.contains("title: changes retractions\n"));
        assert!(block.contains("description: change for {{series}}\n"));
        assert!(block.contains("file,file2.csv;\n"));
        assert!(block.ends_with("HTTP 201"));
    }

    #[test]
    fn test_paths_pass_through_verbatim() {
        let block = render_change_apply(
            ChangeKind::Appends,
            "{{evil}}.csv",
            1,
            &ScenarioConfig::local(),
        );
        assert!(block.contains("file,{{evil}}.csv;"));
    }

    #[test]
    fn test_run_comment_lists_needed_variables() {
        let templated = render_run_comment(&ScenarioConfig::templated());
        assert!(templated.starts_with("# run: hurl FILE_NAME --variable series=series-01"));
        assert!(templated.contains("scheme="));
        assert!(templated.contains("host_name="));
        assert!(templated.contains("auth_token="));

        let local = render_run_comment(&ScenarioConfig::local());
        assert_eq!(local, "# run: hurl FILE_NAME --variable series=series-01");
    }
}
