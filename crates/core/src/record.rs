//! Typed schema of the company document served by the data endpoint.
//!
//! The site populates these sub-documents inconsistently, so every field at
//! every depth is optional. A value of the wrong JSON type degrades to `None`
//! for that field alone, and list elements that do not fit their row type are
//! dropped individually. Deserializing a JSON object into [`CompanyRecord`]
//! therefore never fails; unknown keys are ignored.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A flat JSON row whose columns are chosen at display time.
pub type Row = Map<String, Value>;

/// The known `pageProps` sections of a company overview document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyRecord {
    #[serde(deserialize_with = "lenient")]
    pub company_meta_information: Option<CompanyMeta>,
    #[serde(deserialize_with = "lenient")]
    pub benefits: Option<BenefitsData>,
    /// Carried through untouched; nothing is displayed from it.
    pub company_header_data: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub interviews_data: Option<InterviewsData>,
    #[serde(deserialize_with = "lenient")]
    pub salaries_list: Option<SalariesList>,
    #[serde(deserialize_with = "lenient")]
    pub photos_data: Option<PhotosData>,
    #[serde(deserialize_with = "lenient")]
    pub jobs_data: Option<JobsData>,
    #[serde(deserialize_with = "lenient_list")]
    pub faqs: Option<Vec<Faq>>,
    #[serde(deserialize_with = "lenient")]
    pub aggregated_ratings_data: Option<AggregatedRatings>,
    #[serde(deserialize_with = "lenient_list")]
    pub office_locations: Option<Vec<OfficeLocation>>,
    #[serde(deserialize_with = "lenient_list")]
    pub similar_companies: Option<Vec<SimilarCompany>>,
    #[serde(deserialize_with = "lenient_list")]
    pub reviews: Option<Vec<Review>>,
}

impl CompanyRecord {
    /// Build a record from the `pageProps` object of a data response.
    ///
    /// Returns `None` when `page_props` is not a JSON object.
    pub fn from_page_props(page_props: &Value) -> Option<Self> {
        if !page_props.is_object() {
            return None;
        }
        Self::deserialize(page_props).ok()
    }

    /// Names of the sections present in the document, in schema order.
    pub fn present_sections(&self) -> Vec<&'static str> {
        let flags = [
            ("companyMetaInformation", self.company_meta_information.is_some()),
            ("benefits", self.benefits.is_some()),
            ("companyHeaderData", self.company_header_data.as_ref().is_some_and(|v| !v.is_null())),
            ("interviewsData", self.interviews_data.is_some()),
            ("salariesList", self.salaries_list.is_some()),
            ("photosData", self.photos_data.is_some()),
            ("jobsData", self.jobs_data.is_some()),
            ("faqs", self.faqs.is_some()),
            ("aggregatedRatingsData", self.aggregated_ratings_data.is_some()),
            ("officeLocations", self.office_locations.is_some()),
            ("similarCompanies", self.similar_companies.is_some()),
            ("reviews", self.reviews.is_some()),
        ];
        flags.into_iter().filter_map(|(name, present)| present.then_some(name)).collect()
    }
}

/// A scalar rendered for display, accepting any JSON value.
///
/// Strings are kept verbatim, numbers and booleans use their JSON text,
/// arrays are joined with `", "`, objects become compact JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cell(pub String);

impl Cell {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Cell(cell_text(&value)))
    }
}

/// Display text for an arbitrary JSON value.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(cell_text).collect::<Vec<_>>().join(", "),
        Value::Object(_) => value.to_string(),
    }
}

/// Anything the site labels with a `name`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Named {
    pub name: Option<Cell>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyMeta {
    pub company_name: Option<Cell>,
    pub description: Option<Cell>,
    pub website_name: Option<Cell>,
    pub website: Option<Cell>,
    pub ceo: Option<Cell>,
    pub founded_year: Option<Cell>,
    pub global_employee_count: Option<Cell>,
    pub indian_employee_count_range: Option<Cell>,
    #[serde(deserialize_with = "lenient_list")]
    pub type_of_company: Option<Vec<Named>>,
    #[serde(deserialize_with = "lenient")]
    pub ownership: Option<Named>,
    #[serde(deserialize_with = "lenient_list")]
    pub primary_industry: Option<Vec<Named>>,
    #[serde(deserialize_with = "lenient_list")]
    pub secondary_industry: Option<Vec<Named>>,
    #[serde(deserialize_with = "lenient")]
    pub social_links: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BenefitsData {
    #[serde(deserialize_with = "lenient_list")]
    pub benefits: Option<Vec<Benefit>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Benefit {
    pub name: Option<Cell>,
    pub count: Option<Cell>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterviewsData {
    #[serde(deserialize_with = "lenient")]
    pub interview_rounds_data: Option<InterviewRounds>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InterviewRounds {
    #[serde(deserialize_with = "lenient")]
    pub meta: Option<InterviewMeta>,
    #[serde(deserialize_with = "lenient_list")]
    pub duration: Option<Vec<Row>>,
    #[serde(deserialize_with = "lenient_list")]
    pub difficulty: Option<Vec<Row>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InterviewMeta {
    pub interview_count: Option<Cell>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SalariesList {
    #[serde(deserialize_with = "lenient")]
    pub designations: Option<Designations>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Designations {
    #[serde(deserialize_with = "lenient_list")]
    pub job_profiles: Option<Vec<SalaryProfile>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalaryProfile {
    pub job_profile_name: Option<Cell>,
    pub min_experience: Option<Cell>,
    pub max_experience: Option<Cell>,
    pub min_ctc: Option<Cell>,
    pub max_ctc: Option<Cell>,
    pub avg_ctc: Option<Cell>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PhotosData {
    #[serde(deserialize_with = "lenient")]
    pub data: Option<PhotosPage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PhotosPage {
    #[serde(deserialize_with = "lenient_list")]
    pub photos: Option<Vec<Photo>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Photo {
    pub url: Option<Cell>,
    pub caption: Option<Cell>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JobsData {
    #[serde(deserialize_with = "lenient")]
    pub data: Option<JobsPage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct JobsPage {
    #[serde(deserialize_with = "lenient_list")]
    pub jobs: Option<Vec<Job>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Job {
    pub title: Option<Cell>,
    pub locations: Option<Cell>,
    pub min_exp: Option<Cell>,
    pub max_exp: Option<Cell>,
    pub skills: Option<Cell>,
    pub posted_on: Option<Cell>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Faq {
    pub question: Option<Cell>,
    pub answer: Option<Cell>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AggregatedRatings {
    #[serde(deserialize_with = "lenient")]
    pub rating_distribution: Option<DataEnvelope<RatingDistribution>>,
    #[serde(deserialize_with = "lenient")]
    pub work_policy_distribution: Option<DataEnvelope<WorkPolicyDistribution>>,
    #[serde(deserialize_with = "lenient")]
    pub gender_insights: Option<DataEnvelope<GenderInsights>>,
}

/// The `{ "data": ... }` wrapper the site puts around most widgets.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, bound = "T: DeserializeOwned")]
pub struct DataEnvelope<T> {
    #[serde(deserialize_with = "lenient")]
    pub data: Option<T>,
}

impl<T> Default for DataEnvelope<T> {
    fn default() -> Self {
        Self { data: None }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RatingDistribution {
    /// Category name to rating.
    #[serde(deserialize_with = "lenient")]
    pub ratings: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkPolicyDistribution {
    #[serde(deserialize_with = "lenient_list")]
    pub work_policy_list: Option<Vec<Row>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenderInsights {
    #[serde(rename = "M", deserialize_with = "lenient")]
    pub male: Option<GenderBucket>,
    #[serde(rename = "F", deserialize_with = "lenient")]
    pub female: Option<GenderBucket>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenderBucket {
    #[serde(deserialize_with = "lenient_list")]
    pub top_ratings: Option<Vec<Row>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OfficeLocation {
    pub name: Option<Cell>,
    pub state: Option<Cell>,
    pub avg_company_rating: Option<Cell>,
    pub reviews_count: Option<Cell>,
    pub salaries_count: Option<Cell>,
    #[serde(deserialize_with = "lenient_list")]
    pub addresses: Option<Vec<OfficeAddress>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OfficeAddress {
    pub office_title: Option<Cell>,
    pub city: Option<Cell>,
    pub pincode: Option<Cell>,
    pub address: Option<Cell>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimilarCompany {
    pub short_name: Option<Cell>,
    pub industry: Option<Cell>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Review {
    pub user_name: Option<Cell>,
    pub overall_company_rating: Option<Cell>,
    pub likes_text: Option<Cell>,
    #[serde(rename = "disLikesText")]
    pub dislikes_text: Option<Cell>,
    pub work_policy: Option<Cell>,
    pub work_policy_other: Option<Cell>,
    pub division: Option<Cell>,
    pub employment_type: Option<Cell>,
    pub modified_human_readable: Option<Cell>,
    #[serde(deserialize_with = "lenient_list")]
    pub rating_distribution: Option<Vec<Row>>,
}

/// Deserialize `T`, or `None` if the value is null or has the wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Deserialize a list, dropping elements that do not fit `T`.
///
/// Anything other than an array becomes `None`.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => {
            Some(items.into_iter().filter_map(|item| serde_json::from_value(item).ok()).collect())
        }
        _ => None,
    })
}
