//! Record normalization into display sections.
//!
//! Each section is an independent extract-or-default projection over the
//! typed record: a missing, null or empty value anywhere on a section's path
//! yields `Section::Unavailable` for that section only.

use ambitscope_core::record::{self, Cell, CompanyMeta, CompanyRecord, Named, Row, cell_text};
use ambitscope_core::sections::{
    DisplaySections, Faq, GenderInsights, Interviews, NOT_AVAILABLE, Office, Overview, Photo, Review, Section,
    SimilarCompany, SocialLink, Table,
};

use super::markup::clean;

/// Columns surfaced for job listings.
pub const JOB_COLUMNS: [&str; 6] = ["Title", "Locations", "MinExp", "MaxExp", "Skills", "PostedOn"];

/// Columns surfaced for salary profiles.
pub const SALARY_COLUMNS: [&str; 6] =
    ["jobProfileName", "minExperience", "maxExperience", "minCtc", "maxCtc", "avgCtc"];

/// Columns surfaced for benefits.
pub const BENEFIT_COLUMNS: [&str; 2] = ["name", "count"];

/// Columns surfaced for office addresses.
pub const ADDRESS_COLUMNS: [&str; 4] = ["officeTitle", "city", "pincode", "address"];

/// Columns of the flattened rating distribution.
pub const RATING_COLUMNS: [&str; 2] = ["Category", "Rating"];

/// Normalize a fetched record into display sections. Never fails.
pub fn normalize(record: &CompanyRecord) -> DisplaySections {
    let sections = DisplaySections {
        overview: overview(record),
        social_links: social_links(record),
        ratings: ratings(record),
        interviews: interviews(record),
        jobs: jobs(record),
        salaries: salaries(record),
        work_policy: work_policy(record),
        gender_insights: gender_insights(record),
        benefits: benefits(record),
        photos: photos(record),
        faqs: faqs(record),
        similar_companies: similar_companies(record),
        offices: offices(record),
        reviews: reviews(record),
    };

    tracing::debug!(available = sections.available_count(), "normalized company record");

    sections
}

fn overview(record: &CompanyRecord) -> Section<Overview> {
    let Some(meta) = record.company_meta_information.as_ref().filter(|m| !meta_is_empty(m)) else {
        return Section::Unavailable;
    };

    Section::Available(Overview {
        name: text_or_na(&meta.company_name),
        description: text_or_na(&meta.description),
        website_name: text_or_na(&meta.website_name),
        website: text_or_na(&meta.website),
        ceo: text_or_na(&meta.ceo),
        founded_year: text_or_na(&meta.founded_year),
        global_employee_count: text_or_na(&meta.global_employee_count),
        indian_employee_count: text_or_na(&meta.indian_employee_count_range),
        company_types: join_names(meta.type_of_company.as_deref()),
        ownership: meta.ownership.as_ref().map_or_else(|| NOT_AVAILABLE.to_string(), |o| text_or_na(&o.name)),
        primary_industries: join_names(meta.primary_industry.as_deref()),
        secondary_industries: join_names(meta.secondary_industry.as_deref()),
    })
}

fn meta_is_empty(meta: &CompanyMeta) -> bool {
    [
        &meta.company_name,
        &meta.description,
        &meta.website_name,
        &meta.website,
        &meta.ceo,
        &meta.founded_year,
        &meta.global_employee_count,
        &meta.indian_employee_count_range,
    ]
    .iter()
    .all(|c| c.is_none())
        && meta.type_of_company.as_deref().is_none_or(<[Named]>::is_empty)
        && meta.ownership.is_none()
        && meta.primary_industry.as_deref().is_none_or(<[Named]>::is_empty)
        && meta.secondary_industry.as_deref().is_none_or(<[Named]>::is_empty)
}

fn social_links(record: &CompanyRecord) -> Section<Vec<SocialLink>> {
    let links: Vec<SocialLink> = record
        .company_meta_information
        .as_ref()
        .and_then(|m| m.social_links.as_ref())
        .map(|links| {
            links
                .iter()
                .map(|(platform, url)| (platform, cell_text(url)))
                .filter(|(_, url)| !url.is_empty())
                .map(|(platform, url)| SocialLink { platform: capitalize(platform), url })
                .collect()
        })
        .unwrap_or_default();

    non_empty(links)
}

fn ratings(record: &CompanyRecord) -> Section<Table> {
    let Some(ratings) = record
        .aggregated_ratings_data
        .as_ref()
        .and_then(|r| r.rating_distribution.as_ref())
        .and_then(|d| d.data.as_ref())
        .and_then(|d| d.ratings.as_ref())
    else {
        return Section::Unavailable;
    };

    projected(&RATING_COLUMNS, ratings.iter().map(|(category, rating)| vec![category.clone(), cell_text(rating)]))
}

fn interviews(record: &CompanyRecord) -> Section<Interviews> {
    let Some(rounds) = record.interviews_data.as_ref().and_then(|i| i.interview_rounds_data.as_ref()) else {
        return Section::Unavailable;
    };

    let interview_count =
        rounds.meta.as_ref().map_or_else(|| NOT_AVAILABLE.to_string(), |m| text_or_na(&m.interview_count));
    let duration = dynamic(rounds.duration.as_deref());
    let difficulty = dynamic(rounds.difficulty.as_deref());

    if rounds.meta.is_none() && !duration.is_available() && !difficulty.is_available() {
        return Section::Unavailable;
    }

    Section::Available(Interviews { interview_count, duration, difficulty })
}

fn jobs(record: &CompanyRecord) -> Section<Table> {
    let Some(jobs) = record.jobs_data.as_ref().and_then(|j| j.data.as_ref()).and_then(|d| d.jobs.as_deref()) else {
        return Section::Unavailable;
    };

    projected(
        &JOB_COLUMNS,
        jobs.iter().map(|job| {
            vec![
                blank(&job.title),
                blank(&job.locations),
                blank(&job.min_exp),
                blank(&job.max_exp),
                blank(&job.skills),
                blank(&job.posted_on),
            ]
        }),
    )
}

fn salaries(record: &CompanyRecord) -> Section<Table> {
    let Some(profiles) = record
        .salaries_list
        .as_ref()
        .and_then(|s| s.designations.as_ref())
        .and_then(|d| d.job_profiles.as_deref())
    else {
        return Section::Unavailable;
    };

    projected(
        &SALARY_COLUMNS,
        profiles.iter().map(|p| {
            vec![
                blank(&p.job_profile_name),
                blank(&p.min_experience),
                blank(&p.max_experience),
                blank(&p.min_ctc),
                blank(&p.max_ctc),
                blank(&p.avg_ctc),
            ]
        }),
    )
}

fn work_policy(record: &CompanyRecord) -> Section<Table> {
    dynamic(
        record
            .aggregated_ratings_data
            .as_ref()
            .and_then(|r| r.work_policy_distribution.as_ref())
            .and_then(|w| w.data.as_ref())
            .and_then(|d| d.work_policy_list.as_deref()),
    )
}

fn gender_insights(record: &CompanyRecord) -> Section<GenderInsights> {
    let Some(data) = record
        .aggregated_ratings_data
        .as_ref()
        .and_then(|r| r.gender_insights.as_ref())
        .and_then(|g| g.data.as_ref())
    else {
        return Section::Unavailable;
    };

    if data.male.is_none() && data.female.is_none() {
        return Section::Unavailable;
    }

    let bucket = |b: Option<&record::GenderBucket>| dynamic(b.and_then(|b| b.top_ratings.as_deref()));

    Section::Available(GenderInsights { male: bucket(data.male.as_ref()), female: bucket(data.female.as_ref()) })
}

fn benefits(record: &CompanyRecord) -> Section<Table> {
    let Some(benefits) = record.benefits.as_ref().and_then(|b| b.benefits.as_deref()) else {
        return Section::Unavailable;
    };

    projected(&BENEFIT_COLUMNS, benefits.iter().map(|b| vec![blank(&b.name), blank(&b.count)]))
}

fn photos(record: &CompanyRecord) -> Section<Vec<Photo>> {
    let photos: Vec<Photo> = record
        .photos_data
        .as_ref()
        .and_then(|p| p.data.as_ref())
        .and_then(|d| d.photos.as_deref())
        .unwrap_or_default()
        .iter()
        .filter_map(|p| {
            let url = p.url.as_ref().map(Cell::as_str).filter(|u| !u.is_empty())?;
            Some(Photo { url: url.to_string(), caption: blank(&p.caption) })
        })
        .collect();

    non_empty(photos)
}

fn faqs(record: &CompanyRecord) -> Section<Vec<Faq>> {
    let faqs: Vec<Faq> = record
        .faqs
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|f| Faq { question: text_or_na(&f.question), answer: clean(&text_or_na(&f.answer)) })
        .collect();

    non_empty(faqs)
}

fn similar_companies(record: &CompanyRecord) -> Section<Vec<SimilarCompany>> {
    let companies: Vec<SimilarCompany> = record
        .similar_companies
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|c| SimilarCompany { name: text_or_na(&c.short_name), industry: text_or_na(&c.industry) })
        .collect();

    non_empty(companies)
}

fn offices(record: &CompanyRecord) -> Section<Vec<Office>> {
    let offices: Vec<Office> = record
        .office_locations
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|o| Office {
            name: text_or_na(&o.name),
            state: text_or_na(&o.state),
            average_rating: text_or_na(&o.avg_company_rating),
            review_count: text_or(&o.reviews_count, "0"),
            salary_count: text_or(&o.salaries_count, "0"),
            addresses: projected(
                &ADDRESS_COLUMNS,
                o.addresses.as_deref().unwrap_or_default().iter().map(|a| {
                    vec![blank(&a.office_title), blank(&a.city), blank(&a.pincode), blank(&a.address)]
                }),
            ),
        })
        .collect();

    non_empty(offices)
}

fn reviews(record: &CompanyRecord) -> Section<Vec<Review>> {
    let reviews: Vec<Review> = record
        .reviews
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|r| Review {
            author: text_or(&r.user_name, "Anonymous"),
            rating: text_or_na(&r.overall_company_rating),
            likes: text_or_na(&r.likes_text),
            dislikes: text_or_na(&r.dislikes_text),
            work_policy: text_or_na(&r.work_policy),
            work_policy_other: text_or_na(&r.work_policy_other),
            division: text_or_na(&r.division),
            employment_type: text_or_na(&r.employment_type),
            modified: text_or_na(&r.modified_human_readable),
            rating_distribution: dynamic(r.rating_distribution.as_deref()),
        })
        .collect();

    non_empty(reviews)
}

fn text_or(cell: &Option<Cell>, default: &str) -> String {
    cell.as_ref().map_or_else(|| default.to_string(), |c| c.0.clone())
}

fn text_or_na(cell: &Option<Cell>) -> String {
    text_or(cell, NOT_AVAILABLE)
}

fn blank(cell: &Option<Cell>) -> String {
    text_or(cell, "")
}

/// One name bare, several comma-joined, none `"N/A"`.
pub fn join_names(list: Option<&[Named]>) -> String {
    let names: Vec<&str> = list
        .unwrap_or_default()
        .iter()
        .filter_map(|n| n.name.as_ref())
        .map(Cell::as_str)
        .filter(|n| !n.is_empty())
        .collect();

    match names.as_slice() {
        [] => NOT_AVAILABLE.to_string(),
        [one] => (*one).to_string(),
        many => many.join(", "),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn non_empty<T>(items: Vec<T>) -> Section<Vec<T>> {
    if items.is_empty() { Section::Unavailable } else { Section::Available(items) }
}

fn projected<I>(columns: &[&str], rows: I) -> Section<Table>
where
    I: Iterator<Item = Vec<String>>,
{
    let mut table = Table::new(columns.iter().copied());
    for row in rows {
        table.push_row(row);
    }
    if table.is_empty() { Section::Unavailable } else { Section::Available(table) }
}

/// Table over the union of the rows' keys, in first-seen order.
fn dynamic(rows: Option<&[Row]>) -> Section<Table> {
    let rows = rows.unwrap_or_default();

    let mut columns: Vec<&str> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !columns.contains(&key.as_str()) {
                columns.push(key);
            }
        }
    }

    if columns.is_empty() {
        return Section::Unavailable;
    }

    let mut table = Table::new(columns.iter().copied());
    for row in rows {
        table.push_row(columns.iter().map(|c| row.get(*c).map(cell_text).unwrap_or_default()).collect());
    }
    Section::Available(table)
}
