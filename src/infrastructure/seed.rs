use crate::entities::{articles, institution_details, institutions, prelude::*};
use crate::models::article::ArticleCategory;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use tracing::info;
use uuid::Uuid;

struct StarterInstitution {
    id: &'static str,
    name: &'static str,
    location: &'static str,
    image_url: &'static str,
    application_method: &'static str,
    language_requirements: &'static str,
    application_deadline: &'static str,
    application_test_date: &'static str,
    address: &'static str,
    email: &'static str,
    website_url: &'static str,
}

const STARTERS: &[StarterInstitution] = &[
    StarterInstitution {
        id: "heidelberg",
        name: "Heidelberg",
        location: "Heidelberg",
        image_url: "https://images.unsplash.com/photo-1522661067900-ab829854a57f",
        application_method: "التسجيل أونلاين",
        language_requirements: "B2",
        application_deadline: "1 Mai bis 30 Juni,November bis 15 Dezember",
        application_test_date: "9/10,8/4",
        address: "Im Neuenheimer Feld 684, 69120 Heidelberg",
        email: "studienkolleg@uni-heidelberg.de",
        website_url: "https://www.isz.uni-heidelberg.de/e_index.html",
    },
    StarterInstitution {
        id: "karlsruhe",
        name: "Karlsruhe institut",
        location: "Karlsruhe",
        image_url: "https://images.unsplash.com/photo-1562774053-701939374585",
        application_method: "التسجيل اونلاين",
        language_requirements: "B1",
        application_deadline: "bis 15 Juli,bis 15 Januar",
        application_test_date: "Anfang September,Anfang Februar",
        address: "Adenauerring 2, 76131 Karlsruhe",
        email: "studienkolleg@kit.edu",
        website_url: "https://www.stk.kit.edu/",
    },
    StarterInstitution {
        id: "bayern",
        name: "Studienkolleg bei den Universitäten des Freistaates Bayern",
        location: "Regensburg",
        image_url: "https://images.unsplash.com/photo-1592853598064-0029ebd8de92",
        application_method: "التسجيل يكون على إحدى جامعات الولاية",
        language_requirements: "B2",
        application_deadline: "bis 15 Juli,bis 15 Februar",
        application_test_date: "2/9,5/2",
        address: "Landshuter Str. 22, 93047 Regensburg",
        email: "info@studienkolleg.bayern",
        website_url: "https://www.studienkolleg.bayern.de/",
    },
];

struct StarterArticle {
    title: &'static str,
    excerpt: &'static str,
    content: &'static str,
    image_url: &'static str,
    category: ArticleCategory,
    published: &'static str,
}

const STARTER_ARTICLES: &[StarterArticle] = &[
    StarterArticle {
        title: "How to Prepare for Aufnahmeprüfung",
        excerpt: "The Aufnahmeprüfung (entrance examination) is a crucial step in your journey to studying at a German university through the Studienkolleg pathway. This test evaluates your academic preparedness and determines whether you're ready to begin your studies.",
        content: "The Aufnahmeprüfung (entrance examination) is a crucial step in your journey to studying at a German university through the Studienkolleg pathway. This test evaluates your academic preparedness and determines whether you're ready to begin your studies.\n\nMost Studienkollegs test applicants in mathematics, and depending on your chosen course track, subjects like physics, biology, or social studies. Here are some tips to help you prepare:\n\n1. Understand the format: Each Studienkolleg has its own examination format. Some have multiple-choice questions, while others require detailed written answers. Research the specific format of your target Studienkolleg.\n\n2. Practice with past papers: If available, practice with past examination papers to familiarize yourself with the question types and difficulty level.\n\n3. Focus on your German language skills: Even though the examination tests your academic knowledge, having good German language skills will help you understand the questions better.\n\n4. Join preparation courses: Consider joining preparation courses specifically designed for Studienkolleg entrance examinations.\n\n5. Use online resources: There are many online forums and resources where you can find tips and materials for preparation.\n\nRemember, preparation is key! Start early and practice consistently to increase your chances of success.",
        image_url: "https://images.unsplash.com/photo-1434030216411-0b793f4b4173",
        category: ArticleCategory::Exams,
        published: "2023-05-15T09:00:00Z",
    },
    StarterArticle {
        title: "Student Visa Application Process for Moroccans",
        excerpt: "Applying for a German student visa is a detailed process that requires careful preparation. For Moroccan students, here's a step-by-step guide:",
        content: "Applying for a German student visa is a detailed process that requires careful preparation. For Moroccan students, here's a step-by-step guide:\n\n1. Get accepted into a Studienkolleg: Before applying for a visa, you need an acceptance letter from a German Studienkolleg.\n\n2. Schedule an appointment at the German Embassy: Visa appointments can be booked online through the embassy's website. Do this well in advance as waiting times can be long.\n\n3. Prepare your documents: The main documents you'll need include:\n   - Valid passport\n   - Acceptance letter from the Studienkolleg\n   - Proof of financial resources (blocked account with approximately 11,000 euros)\n   - Health insurance\n   - Proof of accommodation in Germany\n   - Biometric photos\n   - Application forms\n   - Language certificate (usually B1 or B2 level)\n   - High school diploma (Baccalauréat) with translation\n   - Motivation letter\n\n4. Attend your visa interview: Be prepared to answer questions about your study plans, why you chose Germany, and how you plan to finance your studies.\n\n5. Wait for processing: The visa processing time can vary, but it's usually 4-8 weeks. Plan accordingly.\n\n6. Collect your visa: Once approved, you'll need to go back to the embassy to collect your visa.\n\nRemember, the German student visa (National Visa – Category D) allows you to enter Germany. After arrival, you'll need to apply for a residence permit at the local immigration office (Ausländerbehörde).\n\nStay organized and start the process early to avoid any last-minute stress!",
        image_url: "https://images.unsplash.com/photo-1544717297-fa95b6ee9643",
        category: ArticleCategory::Visa,
        published: "2023-06-23T09:00:00Z",
    },
    StarterArticle {
        title: "Understanding the FSP (Feststellungsprüfung)",
        excerpt: "The Feststellungsprüfung (FSP), or assessment test, is the final examination you'll take at the end of your Studienkolleg program. Successfully passing this exam qualifies you to apply to German universities.",
        content: "The Feststellungsprüfung (FSP), or assessment test, is the final examination you'll take at the end of your Studienkolleg program. Successfully passing this exam qualifies you to apply to German universities.\n\nThe FSP is divided into different courses (Kurse) based on your intended field of study:\n\n- T-Kurs: For technical, mathematics, and science programs\n- W-Kurs: For business and economics programs\n- M-Kurs: For medical, biological, and pharmaceutical programs\n- G-Kurs: For humanities and social sciences programs\n- S-Kurs: For language studies programs\n\nEach course has specific subjects that you'll be examined on. For example, if you're in the T-Kurs, you'll be tested on subjects like mathematics, physics, and technical drawing.\n\nThe FSP typically consists of written and oral examinations. The written exams usually take place over several days, with each subject having its own exam. After passing the written exams, you'll proceed to the oral examination, which is conducted by a panel of examiners.\n\nYour FSP result is crucial because it determines your eligibility for university admission and can influence your chances of getting accepted into competitive programs. The higher your score, the better your chances.\n\nPreparation for the FSP starts from day one at the Studienkolleg. Pay attention in classes, complete all assignments, and start revising early. Many Studienkollegs offer mock exams or preparatory sessions before the actual FSP.\n\nRemember, the FSP is challenging but definitely achievable with proper preparation and dedication.",
        image_url: "https://images.unsplash.com/photo-1546410531-bb4caa6b424d",
        category: ArticleCategory::Exams,
        published: "2023-07-10T09:00:00Z",
    },
    StarterArticle {
        title: "Finding Accommodation in Germany",
        excerpt: "Finding suitable accommodation is one of the biggest challenges for international students in Germany. Here are some options to consider:",
        content: "Finding suitable accommodation is one of the biggest challenges for international students in Germany. Here are some options to consider:\n\n1. Student Dormitories (Studentenwohnheim): These are typically the most affordable option. They're managed by the Studentenwerk (student services organization) and offer single rooms with shared kitchens and bathrooms. Apply early as waiting lists can be long.\n\n2. Shared Flats (Wohngemeinschaft or WG): This is a popular option where you rent a room in an apartment and share common areas with other tenants. Websites like WG-Gesucht, Studenten-WG, and Facebook groups are good places to look.\n\n3. Private Rentals: If you prefer living alone, you can rent a studio apartment (Einzimmerwohnung) or a small apartment (Wohnung). This is more expensive but offers more privacy. ImmobilienScout24 and ImmoWelt are popular websites for finding rentals.\n\n4. Temporary Housing: If you haven't found permanent housing before arriving in Germany, consider temporary options like youth hostels, Airbnb, or couchsurfing while you search locally.\n\nWhen searching for accommodation, be aware of common scams, especially if someone asks for money before you've seen the apartment or signed a contract. Never transfer money without verifying the legitimacy of the offer.\n\nImportant documents for renting in Germany include:\n- Passport\n- Student ID or university acceptance letter\n- Proof of income or financial support\n- Credit report (Schufa) – this might be required for private rentals\n\nStart your search early and be persistent. Finding accommodation in Germany, especially in big cities, can be challenging but not impossible with the right approach and patience.",
        image_url: "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267",
        category: ArticleCategory::Living,
        published: "2023-08-05T09:00:00Z",
    },
    StarterArticle {
        title: "Working While Studying in Germany",
        excerpt: "As an international student in Germany, you're allowed to work part-time to support your studies. Understanding the rules and finding the right job can make a significant difference in your student life.",
        content: "As an international student in Germany, you're allowed to work part-time to support your studies. Understanding the rules and finding the right job can make a significant difference in your student life.\n\nWork Regulations:\n- Students from non-EU countries can work 120 full days or 240 half days per year without needing a work permit.\n- During semester breaks, you may be able to work full-time.\n- If you want to work more than the allowed hours, you'll need approval from the Federal Employment Agency and the foreigners' office.\n\nTypes of Student Jobs:\n1. Student Assistant (HiWi): These jobs are available at universities and related to your field of study. They offer flexible hours and relevant experience.\n\n2. Internships: Many companies offer internships for students. Some are mandatory as part of your curriculum and don't count toward your working hour limit.\n\n3. Service Industry: Jobs in restaurants, cafes, or retail shops are common among international students.\n\n4. Tutoring: If you're proficient in certain subjects, consider becoming a tutor for other students.\n\n5. Translation Services: If you're fluent in multiple languages, translation work can be a good option.\n\nFinding a Job:\n- Your university's job portal or career center\n- Online platforms like Studentjob, Jobmensa, or Indeed\n- Local newspapers and bulletin boards\n- Networking with professors, classmates, and friends\n\nImportant Considerations:\n- Balance work with studies – your academic success should remain the priority\n- Understand your tax obligations – students with low income might be exempt from income tax\n- Having German language skills significantly increases your job prospects\n\nWorking while studying not only provides financial support but also gives you valuable experience and helps you integrate into German society. Just make sure to follow the regulations and find a job that complements your studies rather than interferes with them.",
        image_url: "https://images.unsplash.com/photo-1573497019940-1c28c88b4f3e",
        category: ArticleCategory::Living,
        published: "2023-09-12T09:00:00Z",
    },
    StarterArticle {
        title: "German Language Resources for Moroccan Students",
        excerpt: "Mastering German is essential for your success in the Studienkolleg and future university studies. Here are some resources and tips specifically tailored for Moroccan students:",
        content: "Mastering German is essential for your success in the Studienkolleg and future university studies. Here are some resources and tips specifically tailored for Moroccan students:\n\nLanguage Schools in Morocco:\n- Goethe-Institut Rabat and Casablanca: Offers structured courses from A1 to C2 levels and official exams\n- Institut Français: Sometimes offers German courses alongside French\n- Private language schools: IELS, Amideast, and other local options\n\nOnline Learning Platforms:\n- DeutschAkademie: Free comprehensive German course\n- Deutsche Welle: Excellent free resources, including news in simple German\n- Duolingo and Babbel: Good for beginners and daily practice\n- Youtube channels: Easy German, Deutsch für Euch, GermanPod101\n\nStudy Materials:\n- 'Menschen' series: Popular textbooks used in many language schools\n- 'Aspekte Neu' for B1+ and above\n- 'Grammatik Aktiv' for grammar practice\n- 'Fit fürs Goethe-Zertifikat' series for exam preparation\n\nLanguage Exchange:\n- Tandem: Find German speakers who want to learn Arabic or French\n- Language exchange events in major Moroccan cities\n- Online communities: Facebook groups for Moroccans learning German\n\nTips for Moroccan Learners:\n- Leverage your knowledge of French if you speak it, as many vocabulary items are similar\n- Focus on pronunciation early, as some German sounds don't exist in Arabic or Moroccan Darija\n- Practice consistently rather than intensively before exams\n- Watch German TV shows with subtitles to improve comprehension\n- Set your phone and social media to German\n\nExam Preparation:\n- Register for exams well in advance as spots fill quickly\n- Take practice tests under timed conditions\n- Focus equally on all four skills: reading, writing, listening, and speaking\n- Consider intensive preparation courses before your exam\n\nRemember, language learning takes time and consistent effort. Aim to reach at least B1 level before your Studienkolleg application, and continue improving your German skills throughout your studies in Germany.",
        image_url: "https://images.unsplash.com/photo-1456513080510-7bf3a84b82f8",
        category: ArticleCategory::Language,
        published: "2023-10-28T09:00:00Z",
    },
];

/// Fills empty tables with starter content. Tables that already hold rows
/// are left alone.
pub async fn seed_initial_data(db: &DatabaseConnection) -> anyhow::Result<()> {
    seed_institutions(db).await?;
    seed_articles(db).await?;
    Ok(())
}

async fn seed_institutions(db: &DatabaseConnection) -> anyhow::Result<()> {
    if Institutions::find().count(db).await? > 0 {
        return Ok(());
    }

    info!("🌱 Seeding starter institutions...");

    for s in STARTERS {
        institutions::ActiveModel {
            id: Set(s.id.to_string()),
            name: Set(s.name.to_string()),
            description: Set(String::new()),
            location: Set(s.location.to_string()),
            kind: Set("Studienkolleg".to_string()),
            image_url: Set(s.image_url.to_string()),
            created_at: Set(Some(Utc::now())),
        }
        .insert(db)
        .await?;

        institution_details::ActiveModel {
            institution_id: Set(s.id.to_string()),
            address: Set(Some(s.address.to_string())),
            email: Set(Some(s.email.to_string())),
            website_url: Set(Some(s.website_url.to_string())),
            region: Set(None),
            courses: Set(None),
            application_method: Set(Some(s.application_method.to_string())),
            application_deadline: Set(Some(s.application_deadline.to_string())),
            application_test_date: Set(Some(s.application_test_date.to_string())),
            language_requirements: Set(Some(s.language_requirements.to_string())),
            status: Set(None),
        }
        .insert(db)
        .await?;
    }

    info!("✅ Seeded {} institutions", STARTERS.len());
    Ok(())
}

async fn seed_articles(db: &DatabaseConnection) -> anyhow::Result<()> {
    if Articles::find().count(db).await? > 0 {
        return Ok(());
    }

    info!("🌱 Seeding starter articles...");

    for a in STARTER_ARTICLES {
        let created_at = DateTime::parse_from_rfc3339(a.published)?.with_timezone(&Utc);
        articles::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(a.title.to_string()),
            excerpt: Set(a.excerpt.to_string()),
            content: Set(a.content.to_string()),
            image_url: Set(Some(a.image_url.to_string())),
            category: Set(a.category.as_str().to_string()),
            created_at: Set(created_at),
            updated_at: Set(None),
        }
        .insert(db)
        .await?;
    }

    info!("✅ Seeded {} articles", STARTER_ARTICLES.len());
    Ok(())
}
