//! Starter kits: short study paths per religion or denomination.

use serde::{Deserialize, Serialize};

use crate::store::StorageKey;
use crate::{WidgetError, new_id, position_by_id, required};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Study {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarterKit {
    pub id: String,
    pub title: String,
    pub intro: String,
    #[serde(default)]
    pub studies: Vec<Study>,
}

pub const STARTER_KITS: StorageKey<Vec<StarterKit>> = StorageKey::new("starterKits", seed_kits);

/// Title given to the single study attached to a user-added kit.
pub const FIRST_STUDY_TITLE: &str = "Getting Started";

/// Add a user kit at the top of the list.
///
/// # Errors
///
/// Returns [`WidgetError::Empty`] when `title` is blank.
pub fn add<'a>(kits: &'a mut Vec<StarterKit>, title: &str, intro: &str, first_study: Option<&str>) -> Result<&'a StarterKit, WidgetError> {
    let title = required(title, "title")?;
    let studies = first_study
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|content| vec![Study { title: FIRST_STUDY_TITLE.to_owned(), content: content.to_owned() }])
        .unwrap_or_default();
    kits.insert(0, StarterKit { id: format!("user-{}", new_id()), title, intro: intro.trim().to_owned(), studies });
    Ok(&kits[0])
}

/// # Errors
///
/// Returns [`WidgetError::NotFound`] when no kit matches `id`.
pub fn find<'a>(kits: &'a [StarterKit], id: &str) -> Result<&'a StarterKit, WidgetError> {
    let pos = position_by_id(kits, id, "starter kit", |k| k.id.as_str())?;
    Ok(&kits[pos])
}

fn kit(id: &str, title: &str, intro: &str, studies: [(&str, &str); 3]) -> StarterKit {
    StarterKit {
        id: id.to_owned(),
        title: title.to_owned(),
        intro: intro.to_owned(),
        studies: studies
            .into_iter()
            .map(|(title, content)| Study { title: title.to_owned(), content: content.to_owned() })
            .collect(),
    }
}

/// Kits shown before the user has added or changed anything.
#[must_use]
pub fn seed_kits() -> Vec<StarterKit> {
    vec![
        kit(
            "baptist",
            "Baptist — Starter Kit",
            "Overview of Baptist beliefs: believer's baptism, congregational governance, and emphasis on Scripture.",
            [
                ("History & Distinctives", "Origins in 17th-century English Separatism; local church autonomy."),
                ("Baptism & Communion", "Believer's baptism by immersion; Lord's Supper as ordinance."),
                ("Study Path", "Read Gospel of John, Acts; explore Baptist Faith & Message."),
            ],
        ),
        kit(
            "methodist",
            "Methodist — Starter Kit",
            "Methodism emphasizes grace (prevenient, justifying, sanctifying), connectionalism, and practical holiness.",
            [
                ("Wesleyan Heritage", "John & Charles Wesley; small groups; disciplined devotional life."),
                ("Grace & Discipleship", "Explore grace in Romans; practices of mercy and piety."),
                ("Study Path", "Gospels, Romans; Wesley's sermons; Book of Discipline overview."),
            ],
        ),
        kit(
            "catholic",
            "Catholic — Starter Kit",
            "Catholicism: Scripture and Tradition, sacramental life, and communion with the historic Church.",
            [
                ("Tradition & Magisterium", "How teaching authority functions; ecumenical councils."),
                ("Sacraments", "Seven sacraments; grace in ordinary life; liturgical calendar."),
                ("Study Path", "Synoptic Gospels; Catechism selections; early Church Fathers."),
            ],
        ),
        kit(
            "sda",
            "Seventh-day Adventist — Starter Kit",
            "SDA distinctives include Sabbath observance, holistic health, and the blessed hope of Christ's return.",
            [
                ("Sabbath & Creation", "Genesis 1-2; Exodus 20; rhythm of rest and worship."),
                ("Advent Hope", "Study Daniel & Revelation themes; focus on hope and mission."),
                ("Study Path", "Gospels, Hebrews; thematic studies on sanctuary & mission."),
            ],
        ),
        kit(
            "pentecostal",
            "Pentecostal — Starter Kit",
            "Pentecostalism highlights the work of the Holy Spirit, spiritual gifts, and vibrant worship.",
            [
                ("Acts & the Spirit", "Read Acts; gifts listed in 1 Cor 12-14 and Romans 12."),
                ("Prayer & Worship", "Cultivate prayer, praise, and openness to the Spirit."),
                ("Study Path", "Gospels, Acts; resources on gifts and fruit of the Spirit."),
            ],
        ),
        kit(
            "nondenom",
            "Non-Denominational — Starter Kit",
            "Focus on biblical essentials, discipleship, and simple church expressions.",
            [
                ("Core Beliefs", "Jesus-centered gospel; authority of Scripture; community life."),
                ("Practices", "Small groups, service, local mission, simple liturgy."),
                ("Study Path", "Gospels, Acts; read a whole Gospel; memorize key passages."),
            ],
        ),
        kit(
            "judaism",
            "Judaism — Starter Kit",
            "Explore Torah, Prophets, and Writings; synagogue life; cycles of prayer and festival.",
            [
                ("Tanakh Overview", "Structure and themes; covenant; wisdom literature."),
                ("Life & Practice", "Shabbat, kosher, prayer services; Hebrew calendar."),
                ("Study Path", "Genesis, Exodus; Psalms; explore rabbinic commentary."),
            ],
        ),
        kit(
            "islam",
            "Islam — Starter Kit",
            "Overview of Qur'an, Prophetic tradition, Five Pillars, and diverse schools of thought.",
            [
                ("Scripture & Prophethood", "Qur'an structure; role of hadith; prophets in Islam."),
                ("Five Pillars", "Shahada, Salat, Zakat, Sawm, Hajj; daily life rhythms."),
                ("Study Path", "Introductory surahs; biographies; comparative faith studies."),
            ],
        ),
    ]
}

#[cfg(test)]
#[path = "kits_test.rs"]
mod tests;
