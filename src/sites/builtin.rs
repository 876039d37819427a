//! Built-in rule table for well-known job boards.
//!
//! Job-board markup changes often; the selectors below are reference data,
//! ordered from the current layout to older ones. Override them with
//! [`Registry::from_json`](super::Registry::from_json) rather than editing
//! logic elsewhere.

use super::{GenericProfile, PageGuard, Platform, RegistryTable, SiteProfile, UrlMatcher};
use crate::selector::ExtractionRule;

/// Company names on profiled sites: anything a header might hold.
const COMPANY_MAX: usize = 100;
/// Role titles on profiled sites are accepted above 3 characters.
const SITE_ROLE_MIN: usize = 4;
const ROLE_MAX: usize = 200;

fn company(selectors: &[&str], brands: &[&str]) -> Vec<ExtractionRule> {
    selectors
        .iter()
        .map(|selector| {
            ExtractionRule::css(selector)
                .bounds(1, COMPANY_MAX)
                .block(brands)
        })
        .collect()
}

fn role(selectors: &[&str], brands: &[&str]) -> Vec<ExtractionRule> {
    selectors
        .iter()
        .map(|selector| {
            ExtractionRule::css(selector)
                .bounds(SITE_ROLE_MIN, ROLE_MAX)
                .block(brands)
        })
        .collect()
}

fn host(needle: &str) -> UrlMatcher {
    UrlMatcher::HostContains(needle.to_string())
}

fn linkedin() -> SiteProfile {
    let brands = ["LinkedIn"];

    let mut company_rules = company(
        &[
            ".job-details-jobs-unified-top-card__company-name a",
            ".job-details-jobs-unified-top-card__company-name",
            ".jobs-unified-top-card__company-name a",
            ".jobs-unified-top-card__company-name",
            ".topcard__org-name-link",
            ".top-card-layout__second-subline .topcard__flavor a",
        ],
        &brands,
    );
    company_rules.push(
        ExtractionRule::attribute(".jobs-company__box img[alt]", "alt")
            .bounds(1, COMPANY_MAX)
            .block(&brands)
            .block(&["logo"]),
    );

    SiteProfile {
        name: "linkedin".to_string(),
        matcher: host("linkedin.com"),
        company_rules,
        role_rules: role(
            &[
                ".job-details-jobs-unified-top-card__job-title h1",
                ".job-details-jobs-unified-top-card__job-title",
                ".jobs-unified-top-card__job-title",
                ".top-card-layout__title",
                ".topcard__title",
                "h1.t-24",
            ],
            &brands,
        ),
        // A search page lists many jobs; only a selected job with its
        // details panel loaded counts as a single listing.
        guard: Some(PageGuard {
            required_params: vec!["currentJobId".to_string()],
            required_selectors: vec![
                ".jobs-search__job-details--container, .jobs-search__job-details, .job-view-layout, .jobs-details"
                    .to_string(),
            ],
            any_of_selectors: vec![
                ".jobs-apply-button".to_string(),
                ".jobs-apply-button--top-card".to_string(),
                ".jobs-description".to_string(),
                ".jobs-description-content__text".to_string(),
                "#job-details".to_string(),
            ],
        }),
    }
}

fn indeed() -> SiteProfile {
    let brands = ["Indeed"];
    SiteProfile {
        name: "indeed".to_string(),
        matcher: host("indeed."),
        company_rules: company(
            &[
                r#"[data-testid="inlineHeader-companyName"] a"#,
                r#"[data-testid="inlineHeader-companyName"]"#,
                r#"[data-company-name="true"]"#,
                ".jobsearch-CompanyInfoContainer a",
                ".jobsearch-InlineCompanyRating div",
            ],
            &brands,
        ),
        role_rules: role(
            &[
                r#"[data-testid="jobsearch-JobInfoHeader-title"] span"#,
                r#"[data-testid="jobsearch-JobInfoHeader-title"]"#,
                "h1.jobsearch-JobInfoHeader-title",
                r#"h1[class*="JobInfoHeader"]"#,
            ],
            &brands,
        ),
        guard: None,
    }
}

fn glassdoor() -> SiteProfile {
    let brands = ["Glassdoor"];
    SiteProfile {
        name: "glassdoor".to_string(),
        matcher: host("glassdoor."),
        company_rules: company(
            &[
                r#"[data-test="employer-name"]"#,
                r#"[data-test="employerName"]"#,
                r#"[class*="EmployerProfile_employerName"]"#,
                ".employerName",
            ],
            &brands,
        ),
        role_rules: role(
            &[
                r#"[data-test="job-title"]"#,
                r#"[data-test="jobTitle"]"#,
                r#"[class*="JobDetails_jobTitle"]"#,
                ".jobTitle",
            ],
            &brands,
        ),
        guard: None,
    }
}

fn instahyre() -> SiteProfile {
    let brands = ["Instahyre"];
    SiteProfile {
        name: "instahyre".to_string(),
        matcher: host("instahyre.com"),
        company_rules: company(
            &[
                "#job-company-name",
                ".company-name",
                r#"[class*="employer-name"]"#,
                ".opportunity-company",
            ],
            &brands,
        ),
        role_rules: role(&["#job-title", ".job-title", ".designation", "h1"], &brands),
        guard: None,
    }
}

fn wellfound() -> SiteProfile {
    let brands = ["Wellfound", "AngelList"];
    SiteProfile {
        name: "wellfound".to_string(),
        matcher: UrlMatcher::UrlRegex(
            r"(?i)^https?://([^/]*\.)?(wellfound\.com|angel\.co|angellist\.com)(/|$)".to_string(),
        ),
        company_rules: company(
            &[
                r#"[data-test="StartupHeader"] h2"#,
                r#"a[data-test="company-link"]"#,
                r#"[class*="startupName"]"#,
                r#"a[href^="/company/"] h2"#,
            ],
            &brands,
        ),
        role_rules: role(
            &[r#"[data-test="JobTitle"]"#, r#"h1[class*="jobTitle"]"#, "h1"],
            &brands,
        ),
        guard: None,
    }
}

fn naukri() -> SiteProfile {
    let brands = ["Naukri"];
    SiteProfile {
        name: "naukri".to_string(),
        matcher: host("naukri.com"),
        company_rules: company(
            &[
                r#"[class*="jd-header-comp-name"] a"#,
                r#"[class*="jd-header-comp-name"]"#,
                r#"[class*="comp-name"]"#,
            ],
            &brands,
        ),
        role_rules: role(&[r#"h1[class*="jd-header-title"]"#, r#"[class*="jd-header-title"]"#], &brands),
        guard: None,
    }
}

fn platforms() -> Vec<Platform> {
    [
        ("linkedin.com", "LinkedIn"),
        ("indeed.com", "Indeed"),
        ("glassdoor.com", "Glassdoor"),
        ("glassdoor.co.in", "Glassdoor"),
        ("naukri.com", "Naukri"),
        ("instahyre.com", "Instahyre"),
        ("wellfound.com", "Wellfound"),
        ("angel.co", "AngelList"),
        ("angellist.com", "AngelList"),
        ("monster.com", "Monster"),
        ("ziprecruiter.com", "ZipRecruiter"),
        ("dice.com", "Dice"),
        ("simplyhired.com", "SimplyHired"),
        ("greenhouse.io", "Greenhouse"),
        ("lever.co", "Lever"),
        ("myworkdayjobs.com", "Workday"),
        ("ashbyhq.com", "Ashby"),
    ]
    .into_iter()
    .map(|(domain, brand)| Platform {
        domain: domain.to_string(),
        brand: brand.to_string(),
    })
    .collect()
}

/// The built-in registry table.
#[must_use]
pub fn table() -> RegistryTable {
    RegistryTable {
        profiles: vec![linkedin(), indeed(), glassdoor(), instahyre(), wellfound(), naukri()],
        generic: GenericProfile::default(),
        platforms: platforms(),
    }
}
