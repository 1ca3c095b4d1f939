//! Display-ready company profile sections.
//!
//! Every section is independent: either `Available` with flat, already
//! formatted values, or `Unavailable`, which renders as that section's
//! "no data" placeholder.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// Placeholder for a missing scalar field.
pub const NOT_AVAILABLE: &str = "N/A";

/// One display section, or the explicit marker that it has no data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Section<T> {
    Available(T),
    Unavailable,
}

impl<T> Section<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, Section::Available(_))
    }

    pub fn available(self) -> Option<T> {
        match self {
            Section::Available(v) => Some(v),
            Section::Unavailable => None,
        }
    }
}

impl<T> From<Option<T>> for Section<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Section::Unavailable, Section::Available)
    }
}

/// A table with fixed, ordered columns and rows of display strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self { columns: columns.into_iter().map(Into::into).collect(), rows: Vec::new() }
    }

    /// Append a row, padding or truncating it to the column count.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value of `column` in row `row`, if both exist.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row).and_then(|r| r.get(idx)).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Overview {
    pub name: String,
    pub description: String,
    pub website_name: String,
    pub website: String,
    pub ceo: String,
    pub founded_year: String,
    pub global_employee_count: String,
    pub indian_employee_count: String,
    pub company_types: String,
    pub ownership: String,
    pub primary_industries: String,
    pub secondary_industries: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Interviews {
    pub interview_count: String,
    pub duration: Section<Table>,
    pub difficulty: Section<Table>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GenderInsights {
    pub male: Section<Table>,
    pub female: Section<Table>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Photo {
    pub url: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SimilarCompany {
    pub name: String,
    pub industry: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Office {
    pub name: String,
    pub state: String,
    pub average_rating: String,
    pub review_count: String,
    pub salary_count: String,
    pub addresses: Section<Table>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Review {
    pub author: String,
    pub rating: String,
    pub likes: String,
    pub dislikes: String,
    pub work_policy: String,
    pub work_policy_other: String,
    pub division: String,
    pub employment_type: String,
    pub modified: String,
    pub rating_distribution: Section<Table>,
}

/// The normalized company profile, one entry per display section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DisplaySections {
    pub overview: Section<Overview>,
    pub social_links: Section<Vec<SocialLink>>,
    pub ratings: Section<Table>,
    pub interviews: Section<Interviews>,
    pub jobs: Section<Table>,
    pub salaries: Section<Table>,
    pub work_policy: Section<Table>,
    pub gender_insights: Section<GenderInsights>,
    pub benefits: Section<Table>,
    pub photos: Section<Vec<Photo>>,
    pub faqs: Section<Vec<Faq>>,
    pub similar_companies: Section<Vec<SimilarCompany>>,
    pub offices: Section<Vec<Office>>,
    pub reviews: Section<Vec<Review>>,
}

impl DisplaySections {
    /// Every section unavailable.
    pub fn empty() -> Self {
        Self {
            overview: Section::Unavailable,
            social_links: Section::Unavailable,
            ratings: Section::Unavailable,
            interviews: Section::Unavailable,
            jobs: Section::Unavailable,
            salaries: Section::Unavailable,
            work_policy: Section::Unavailable,
            gender_insights: Section::Unavailable,
            benefits: Section::Unavailable,
            photos: Section::Unavailable,
            faqs: Section::Unavailable,
            similar_companies: Section::Unavailable,
            offices: Section::Unavailable,
            reviews: Section::Unavailable,
        }
    }

    /// Number of sections that carry data.
    pub fn available_count(&self) -> usize {
        [
            self.overview.is_available(),
            self.social_links.is_available(),
            self.ratings.is_available(),
            self.interviews.is_available(),
            self.jobs.is_available(),
            self.salaries.is_available(),
            self.work_policy.is_available(),
            self.gender_insights.is_available(),
            self.benefits.is_available(),
            self.photos.is_available(),
            self.faqs.is_available(),
            self.similar_companies.is_available(),
            self.offices.is_available(),
            self.reviews.is_available(),
        ]
        .into_iter()
        .filter(|available| *available)
        .count()
    }

    /// Heading of the overview section.
    pub fn header(&self) -> String {
        let name = match &self.overview {
            Section::Available(o) => o.name.as_str(),
            Section::Unavailable => NOT_AVAILABLE,
        };
        format!("Company Overview: {name}")
    }

    /// Render every section as GitHub-flavoured Markdown.
    pub fn to_markdown(&self) -> String {
        self.to_string().trim_end().to_string()
    }

    fn write_markdown(&self, out: &mut impl Write) -> fmt::Result {
        writeln!(out, "# {}\n", self.header())?;

        match &self.overview {
            Section::Available(o) => {
                let website = if o.website == NOT_AVAILABLE { "#" } else { o.website.as_str() };
                writeln!(out, "- **Name**: {}", o.name)?;
                writeln!(out, "- **Description**: {}", o.description)?;
                writeln!(out, "- **Website**: [{}]({})", o.website_name, website)?;
                writeln!(out, "- **CEO**: {}", o.ceo)?;
                writeln!(out, "- **Founded Year**: {}", o.founded_year)?;
                writeln!(out, "- **Global Employee Count**: {}", o.global_employee_count)?;
                writeln!(out, "- **Indian Employee Count**: {}", o.indian_employee_count)?;
                writeln!(out, "- **Type of Company**: {}", o.company_types)?;
                writeln!(out, "- **Ownership**: {}", o.ownership)?;
                writeln!(out, "- **Primary Industries**: {}", o.primary_industries)?;
                writeln!(out, "- **Secondary Industries**: {}", o.secondary_industries)?;
                out.write_char('\n')?;
            }
            Section::Unavailable => placeholder(out, "No company overview available.")?,
        }

        heading(out, "Social Media Links")?;
        match &self.social_links {
            Section::Available(links) => {
                for link in links {
                    writeln!(out, "- [{}]({})", link.platform, link.url)?;
                }
                out.write_char('\n')?;
            }
            Section::Unavailable => placeholder(out, "No social media links available.")?,
        }

        heading(out, "Company Ratings")?;
        table_or(out, &self.ratings, "No ratings data available.")?;

        heading(out, "Interview Insights")?;
        match &self.interviews {
            Section::Available(i) => {
                writeln!(out, "Total Interview Count: {}\n", i.interview_count)?;
                out.write_str("Interview Duration:\n\n")?;
                table_or(out, &i.duration, "No duration data available.")?;
                out.write_str("Difficulty Levels:\n\n")?;
                table_or(out, &i.difficulty, "No difficulty data available.")?;
            }
            Section::Unavailable => placeholder(out, "No interview insights available.")?,
        }

        heading(out, "Job Listings")?;
        table_or(out, &self.jobs, "No job listings available.")?;

        heading(out, "Salary Insights")?;
        table_or(out, &self.salaries, "No salary insights available.")?;

        heading(out, "Work Policy Distribution")?;
        table_or(out, &self.work_policy, "No work policy distribution data available.")?;

        heading(out, "Gender Insights")?;
        match &self.gender_insights {
            Section::Available(g) => {
                out.write_str("Male:\n\n")?;
                table_or(out, &g.male, "No data available.")?;
                out.write_str("Female:\n\n")?;
                table_or(out, &g.female, "No data available.")?;
            }
            Section::Unavailable => placeholder(out, "No gender insights available.")?,
        }

        heading(out, "Employee Benefits")?;
        table_or(out, &self.benefits, "No employee benefits data available.")?;

        heading(out, "Company Photos")?;
        match &self.photos {
            Section::Available(photos) => {
                for photo in photos {
                    writeln!(out, "![{}]({})", photo.caption, photo.url)?;
                }
                out.write_char('\n')?;
            }
            Section::Unavailable => placeholder(out, "No company photos available.")?,
        }

        heading(out, "Frequently Asked Questions")?;
        match &self.faqs {
            Section::Available(faqs) => {
                for faq in faqs {
                    writeln!(out, "<details><summary>{}</summary>\n\n{}\n\n</details>\n", faq.question, faq.answer)?;
                }
            }
            Section::Unavailable => placeholder(out, "No FAQs available.")?,
        }

        heading(out, "Similar Companies")?;
        match &self.similar_companies {
            Section::Available(companies) => {
                for company in companies {
                    writeln!(out, "- **{}**: {}", company.name, company.industry)?;
                }
                out.write_char('\n')?;
            }
            Section::Unavailable => placeholder(out, "No similar companies available.")?,
        }

        heading(out, "Office Locations")?;
        match &self.offices {
            Section::Available(offices) => {
                for office in offices {
                    writeln!(out, "### {} ({})\n", office.name, office.state)?;
                    writeln!(out, "- **Average Rating:** {}", office.average_rating)?;
                    writeln!(out, "- **Review Count:** {}", office.review_count)?;
                    writeln!(out, "- **Salary Count:** {}\n", office.salary_count)?;
                    table_or(out, &office.addresses, "No specific addresses available for this location.")?;
                }
            }
            Section::Unavailable => placeholder(out, "No office locations available.")?,
        }

        heading(out, "Employee Reviews")?;
        match &self.reviews {
            Section::Available(reviews) => {
                for review in reviews {
                    writeln!(out, "### Review by {} (Rating: {})\n", review.author, review.rating)?;
                    writeln!(out, "- **Likes:** {}", review.likes)?;
                    writeln!(out, "- **Dislikes:** {}", review.dislikes)?;
                    writeln!(out, "- **Work Policy:** {} - {}", review.work_policy, review.work_policy_other)?;
                    writeln!(out, "- **Division:** {}", review.division)?;
                    writeln!(out, "- **Employment Type:** {}", review.employment_type)?;
                    writeln!(out, "- **Modified:** {}\n", review.modified)?;
                    table_or(out, &review.rating_distribution, "No detailed ratings available.")?;
                }
            }
            Section::Unavailable => placeholder(out, "No reviews available.")?,
        }

        Ok(())
    }
}

impl fmt::Display for DisplaySections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_markdown(f)
    }
}

fn heading(out: &mut impl Write, title: &str) -> fmt::Result {
    writeln!(out, "## {title}\n")
}

fn placeholder(out: &mut impl Write, text: &str) -> fmt::Result {
    writeln!(out, "{text}\n")
}

fn table_or(out: &mut impl Write, table: &Section<Table>, missing: &str) -> fmt::Result {
    match table {
        Section::Available(t) => write_table(out, t),
        Section::Unavailable => placeholder(out, missing),
    }
}

fn write_table(out: &mut impl Write, table: &Table) -> fmt::Result {
    let header: Vec<String> = table.columns.iter().map(|c| escape_cell(c)).collect();
    writeln!(out, "| {} |", header.join(" | "))?;
    writeln!(out, "|{}|", vec![" --- "; table.columns.len()].join("|"))?;
    for row in &table.rows {
        let cells: Vec<String> = row.iter().map(|c| escape_cell(c)).collect();
        writeln!(out, "| {} |", cells.join(" | "))?;
    }
    out.write_char('\n')
}

/// Keep a value on one table line.
fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace(['\r', '\n'], " ")
}
