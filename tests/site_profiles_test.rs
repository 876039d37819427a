use jobscout::selector::{ExtractionRule, Strategy};
use jobscout::sites::{Registry, UrlMatcher};
use jobscout::{detect, Detector, Error, Options};

#[test]
fn indeed_listing() {
    let html = r#"
        <html><head><title>Warehouse Associate - Springfield | Indeed.com</title></head>
        <body>
          <h1 data-testid="jobsearch-JobInfoHeader-title"><span>Warehouse Associate</span></h1>
          <div data-testid="inlineHeader-companyName"><a href="/cmp/globex">Globex Logistics</a></div>
        </body></html>
    "#;
    let details = detect(html, "https://www.indeed.com/viewjob?jk=0a1b2c");
    assert!(details.is_job_page);
    assert_eq!(details.company, "Globex Logistics");
    assert_eq!(details.role, "Warehouse Associate");
}

#[test]
fn glassdoor_listing() {
    let html = r#"
        <html><body>
          <div data-test="employer-name">Initech</div>
          <h1 data-test="job-title">Senior QA Analyst</h1>
        </body></html>
    "#;
    let details = detect(html, "https://www.glassdoor.com/job-listing/senior-qa-analyst-initech-JV_1.htm");
    assert_eq!(details.company, "Initech");
    assert_eq!(details.role, "Senior QA Analyst");
}

#[test]
fn naukri_listing() {
    let html = r#"
        <html><body>
          <h1 class="styles_jd-header-title__rZwM1">Java Developer</h1>
          <div class="styles_jd-header-comp-name__MvqAI"><a>Tata Consultancy Services</a></div>
        </body></html>
    "#;
    let details = detect(html, "https://www.naukri.com/job-listings-java-developer-tcs-3-to-5-years-123");
    assert_eq!(details.company, "Tata Consultancy Services");
    assert_eq!(details.role, "Java Developer");
}

#[test]
fn wellfound_and_angel_hosts_share_a_profile() {
    let html = r#"
        <html><body>
          <div data-test="StartupHeader"><h2>Pied Piper</h2></div>
          <h1 data-test="JobTitle">Compression Engineer</h1>
        </body></html>
    "#;
    for url in ["https://wellfound.com/jobs/99-compression", "https://angel.co/jobs/99-compression"] {
        let details = detect(html, url);
        assert_eq!(details.company, "Pied Piper", "{url}");
        assert_eq!(details.role, "Compression Engineer", "{url}");
    }
}

#[test]
fn linkedin_logo_alt_text_is_last_resort() {
    let html = r#"
        <html><body>
          <div class="jobs-search__job-details--container">
            <div class="jobs-company__box"><img alt="Vandelay Industries" src="x.png"></div>
            <h1 class="t-24">Import Export Specialist</h1>
            <div id="job-details">Responsibilities</div>
          </div>
        </body></html>
    "#;
    let details = detect(html, "https://www.linkedin.com/jobs/search/?currentJobId=5");
    assert_eq!(details.company, "Vandelay Industries");

    let with_logo_word = html.replace("Vandelay Industries", "Vandelay Industries logo");
    let details = detect(&with_logo_word, "https://www.linkedin.com/jobs/search/?currentJobId=5");
    assert_eq!(details.company, "");
}

#[test]
fn custom_table_from_json() {
    let registry = Registry::from_json(
        r#"{
            "profiles": [{
                "name": "acme-board",
                "matcher": {"url_regex": "^https://jobs\\.acme\\.example/posting/"},
                "company_rules": [
                    {"strategy": "attribute", "selector": "[data-employer]", "attribute": "data-employer"}
                ],
                "role_rules": [
                    {"strategy": "css", "selector": ".posting h2", "min_len": 2}
                ],
                "guard": {"any_of_selectors": [".posting"]}
            }],
            "platforms": [{"domain": "acme.example", "brand": "Acme Jobs"}]
        }"#,
    )
    .unwrap();

    let detector = Detector::new(registry, Options::default());
    let html = r#"<html><body><div class="posting" data-employer="Wonka Industries"><h2>QA</h2></div></body></html>"#;

    let details = detector.detect(html, "https://jobs.acme.example/posting/12");
    assert!(details.is_job_page);
    assert_eq!(details.company, "Wonka Industries");
    assert_eq!(details.role, "QA");

    // Same markup without the guard's element
    let details = detector.detect("<html><body><h2>QA</h2></body></html>", "https://jobs.acme.example/posting/12");
    assert!(!details.is_job_page);
}

#[test]
fn custom_table_keeps_generic_defaults() {
    let registry = Registry::from_json("{}").unwrap();
    assert!(registry.profiles().is_empty());
    assert!(!registry.generic().company_selectors.is_empty());

    let detector = Detector::new(registry, Options::default());
    let details = detector.detect("<title>Night Baker | Crumbs</title>", "https://www.linkedin.com/jobs/view/1");
    // No profile and no platforms: generic rules only
    assert!(details.is_job_page);
    assert_eq!(details.role, "Night Baker");
    assert_eq!(details.company, "Linkedin");
}

#[test]
fn invalid_tables_are_rejected() {
    let bad_selector = r#"{"profiles": [{"name": "x", "matcher": {"host_contains": "x.example"},
        "company_rules": [{"strategy": "css", "selector": "div[["}]}]}"#;
    assert!(matches!(Registry::from_json(bad_selector), Err(Error::InvalidSelector { .. })));

    let bad_regex = r#"{"profiles": [{"name": "x", "matcher": {"url_regex": "(unclosed"}}]}"#;
    assert!(matches!(Registry::from_json(bad_regex), Err(Error::InvalidRegex(_))));

    let bad_json = r#"{"profiles": [{"name": 3}]}"#;
    assert!(matches!(Registry::from_json(bad_json), Err(Error::Json(_))));

    let bad_bounds = r#"{"profiles": [{"name": "x", "matcher": {"host_contains": "x.example"},
        "role_rules": [{"strategy": "title_segment", "min_len": 9, "max_len": 3}]}]}"#;
    assert!(matches!(Registry::from_json(bad_bounds), Err(Error::InvalidProfile(_))));
}

#[test]
fn builtin_table_round_trips_through_json() {
    let builtin = Registry::builtin();
    let json = serde_json::to_string_pretty(builtin.table()).unwrap();
    let reloaded = Registry::from_json(&json).unwrap();
    assert_eq!(reloaded.table(), builtin.table());

    let linkedin = &reloaded.profiles()[0];
    assert_eq!(linkedin.matcher, UrlMatcher::HostContains("linkedin.com".to_string()));
    assert!(linkedin
        .company_rules
        .iter()
        .any(|rule: &ExtractionRule| matches!(rule.strategy, Strategy::Attribute { .. })));
}
