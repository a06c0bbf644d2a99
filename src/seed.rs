use chrono::{Duration, Utc};

use crate::brand::Brand;
use crate::campaign::{Campaign, CampaignStatus, RewardCurrency};
use crate::database::{Database, MongoDatabase};
use crate::error::Error;
use crate::ipkit::{Asset, AssetCategory, AssetId, AssetMetadata, IpKit};
use crate::submission::{
    CanvasData, CanvasElement, CanvasSize, Submission, SubmissionId, SubmissionStatus,
};
use crate::user::{User, UserId, UserRole};

/// Drops the database and loads a deterministic demo dataset. Ids for the
/// headline records are fixed so manual requests can be replayed.
pub async fn seed(db: &MongoDatabase) -> Result<(), Error> {
    db.drop().await?;

    let admin_id = "USR-7D55B8B0-E193-425B-AB12-57B7A1C19B0B".parse().unwrap();
    let reviewer_id = "USR-9C3E3B80-8A47-4C5A-B0F4-2B8A0FBD7E61".parse().unwrap();
    let creator1_id: UserId = "USR-5A0B2E60-6F18-4B02-8E2C-62E3F1D7A943".parse().unwrap();
    let creator2_id = UserId::new();
    let brand_id = "BRD-E8A14B6C-0D40-4B8E-93C7-0A6F52B1D2A9".parse().unwrap();
    let dragon_kit_id = "KIT-2F6B8C1A-7E4D-4A0B-9C3E-5D8A1B6F4E20".parse().unwrap();
    let neon_kit_id = "KIT-B41C7D9E-3A58-4F06-8B2D-6C0E9F5A1837".parse().unwrap();
    let active_campaign_id = "CPN-16E77539-8873-4C8A-BCA3-2036010474AD".parse().unwrap();
    let capped_campaign_id = "CPN-A3D5F8B1-2C6E-4907-B5A4-8E1D0C7F3962".parse().unwrap();

    let now = Utc::now();

    let users = vec![
        User {
            id: admin_id,
            email: "admin@fanforge.dev".to_string(),
            display_name: "Platform Admin".to_string(),
            role: UserRole::PlatformAdmin,
            created_at: now,
            updated_at: now,
        },
        User {
            id: reviewer_id,
            email: "reviewer@emberworks.example".to_string(),
            display_name: "Riley Reviewer".to_string(),
            role: UserRole::BrandReviewer,
            created_at: now,
            updated_at: now,
        },
        User {
            id: creator1_id,
            email: "casey@example.com".to_string(),
            display_name: "Casey".to_string(),
            role: UserRole::Creator,
            created_at: now,
            updated_at: now,
        },
        User {
            id: creator2_id,
            email: "jordan@example.com".to_string(),
            display_name: "Jordan".to_string(),
            role: UserRole::Creator,
            created_at: now,
            updated_at: now,
        },
    ];
    for user in &users {
        db.users().insert_user(user).await?;
    }

    let brand = Brand {
        id: brand_id,
        name: "Emberworks Studio".to_string(),
        description: Some("Independent animation studio".to_string()),
        logo_url: Some("https://cdn.fanforge.dev/brands/emberworks.png".to_string()),
        website: Some("https://emberworks.example".to_string()),
        contact_email: Some("hello@emberworks.example".to_string()),
        owner_id: admin_id,
        created_at: now,
        updated_at: now,
    };
    db.brands().insert_brand(&brand).await?;

    let dragon_assets = vec![
        Asset {
            id: AssetId::new(),
            filename: "ember-dragon.png".to_string(),
            url: "https://cdn.fanforge.dev/kits/dragon/ember-dragon.png".to_string(),
            thumbnail_url: Some(
                "https://cdn.fanforge.dev/kits/dragon/ember-dragon-thumb.png".to_string(),
            ),
            category: AssetCategory::Characters,
            tags: vec!["dragon".to_string(), "fantasy".to_string()],
            metadata: AssetMetadata {
                width: 2048,
                height: 2048,
                file_size: 1_248_576,
                mime_type: "image/png".to_string(),
            },
            uploaded_by: Some(admin_id),
        },
        Asset {
            id: AssetId::new(),
            filename: "volcano-keep.png".to_string(),
            url: "https://cdn.fanforge.dev/kits/dragon/volcano-keep.png".to_string(),
            thumbnail_url: None,
            category: AssetCategory::Backgrounds,
            tags: vec!["castle".to_string()],
            metadata: AssetMetadata {
                width: 3840,
                height: 2160,
                file_size: 3_145_728,
                mime_type: "image/png".to_string(),
            },
            uploaded_by: Some(admin_id),
        },
        Asset {
            id: AssetId::new(),
            filename: "emberworks-logo.svg".to_string(),
            url: "https://cdn.fanforge.dev/kits/dragon/emberworks-logo.svg".to_string(),
            thumbnail_url: None,
            category: AssetCategory::Logos,
            tags: vec![],
            metadata: AssetMetadata {
                width: 512,
                height: 512,
                file_size: 24_576,
                mime_type: "image/svg+xml".to_string(),
            },
            uploaded_by: Some(admin_id),
        },
    ];

    let ip_kits = vec![
        IpKit {
            id: dragon_kit_id,
            name: "Ember Dragon Kit".to_string(),
            description: Some("Characters and settings from the Ember Dragon saga".to_string()),
            guidelines: Some("No depictions of real-world violence".to_string()),
            brand_id,
            is_published: true,
            version: 3,
            assets: dragon_assets,
            created_at: now,
            updated_at: now,
        },
        IpKit {
            id: neon_kit_id,
            name: "Neon District Kit".to_string(),
            description: Some("Cyberpunk cityscapes and street characters".to_string()),
            guidelines: None,
            brand_id,
            is_published: false,
            version: 1,
            assets: vec![Asset {
                id: AssetId::new(),
                filename: "neon-alley.png".to_string(),
                url: "https://cdn.fanforge.dev/kits/neon/neon-alley.png".to_string(),
                thumbnail_url: None,
                category: AssetCategory::Backgrounds,
                tags: vec!["cyberpunk".to_string(), "neon".to_string()],
                metadata: AssetMetadata {
                    width: 1920,
                    height: 1080,
                    file_size: 2_097_152,
                    mime_type: "image/png".to_string(),
                },
                uploaded_by: Some(admin_id),
            }],
            created_at: now,
            updated_at: now,
        },
    ];
    for ip_kit in &ip_kits {
        db.ip_kits().insert_ip_kit(ip_kit).await?;
    }

    let campaigns = vec![
        Campaign {
            id: active_campaign_id,
            title: "Ember Dragon Fan Art Jam".to_string(),
            description: "Compose original scenes from the Ember Dragon saga".to_string(),
            guidelines: "Use only kit assets. Keep it family friendly.".to_string(),
            ip_kit_id: dragon_kit_id,
            brand_id,
            status: CampaignStatus::Active,
            start_date: Some(now - Duration::days(7)),
            end_date: Some(now + Duration::days(21)),
            max_submissions: None,
            reward_amount: Some(500.0),
            reward_currency: RewardCurrency::USD,
            brief_document: Some("https://emberworks.example/briefs/fan-art-jam.pdf".to_string()),
            is_featured: true,
            created_by: Some(admin_id),
            created_at: now - Duration::days(10),
            updated_at: now - Duration::days(7),
        },
        Campaign {
            id: capped_campaign_id,
            title: "Neon District Poster Contest".to_string(),
            description: "Design a street poster for the Neon District launch".to_string(),
            guidelines: "Posters must be portrait orientation".to_string(),
            ip_kit_id: neon_kit_id,
            brand_id,
            status: CampaignStatus::Active,
            start_date: Some(now - Duration::days(2)),
            end_date: Some(now + Duration::days(5)),
            max_submissions: Some(50),
            reward_amount: Some(250.0),
            reward_currency: RewardCurrency::EUR,
            brief_document: None,
            is_featured: false,
            created_by: Some(admin_id),
            created_at: now - Duration::days(3),
            updated_at: now - Duration::days(2),
        },
        Campaign {
            id: "CPN-0B9D4E27-65F1-48C3-A8B0-7D2E5C9F1A64".parse().unwrap(),
            title: "Dragon Music Video Collab".to_string(),
            description: "Storyboard frames for the next music video".to_string(),
            guidelines: "Frames only, no finished animation".to_string(),
            ip_kit_id: dragon_kit_id,
            brand_id,
            status: CampaignStatus::Draft,
            start_date: None,
            end_date: None,
            max_submissions: None,
            reward_amount: None,
            reward_currency: RewardCurrency::USD,
            brief_document: None,
            is_featured: false,
            created_by: Some(admin_id),
            created_at: now - Duration::days(1),
            updated_at: now - Duration::days(1),
        },
        Campaign {
            id: "CPN-6C1F8A35-92D0-47BE-B3E6-4A7D0C2E8F51".parse().unwrap(),
            title: "Winter Gaming Skins".to_string(),
            description: "Seasonal skin concepts for the Ember Dragon game".to_string(),
            guidelines: "Follow the published palette".to_string(),
            ip_kit_id: dragon_kit_id,
            brand_id,
            status: CampaignStatus::Closed,
            start_date: Some(now - Duration::days(90)),
            end_date: Some(now - Duration::days(30)),
            max_submissions: None,
            reward_amount: Some(1000.0),
            reward_currency: RewardCurrency::USD,
            brief_document: None,
            is_featured: false,
            created_by: Some(admin_id),
            created_at: now - Duration::days(95),
            updated_at: now - Duration::days(30),
        },
    ];
    for campaign in &campaigns {
        db.campaigns().insert_campaign(campaign).await?;
    }

    let canvas = CanvasData {
        elements: vec![CanvasElement {
            id: "element-1".to_string(),
            asset_id: ip_kits[0].assets[0].id,
            x: 120.0,
            y: 80.0,
            width: 640.0,
            height: 640.0,
            rotation: 0.0,
            z_index: 1,
        }],
        canvas_size: CanvasSize {
            width: 1920,
            height: 1080,
        },
        version: "1.0".to_string(),
    };

    let submissions = vec![
        Submission {
            id: "SUB-D2E8F1A6-4B7C-40D9-85E3-9C0A6B2D5F18".parse().unwrap(),
            title: "Dragon Over the Keep".to_string(),
            description: "The ember dragon circling the volcano keep at dusk".to_string(),
            artwork_url: Some(
                "https://cdn.fanforge.dev/submissions/dragon-over-keep.png".to_string(),
            ),
            thumbnail_url: None,
            canvas_data: Some(canvas.clone()),
            tags: vec!["dragon".to_string(), "dusk".to_string()],
            campaign_id: active_campaign_id,
            creator_id: creator1_id,
            status: SubmissionStatus::Pending,
            reviewed_by: None,
            reviewed_at: None,
            feedback: None,
            rating: None,
            is_public: false,
            view_count: 0,
            like_count: 0,
            created_at: now - Duration::days(2),
            updated_at: now - Duration::days(2),
        },
        Submission {
            id: SubmissionId::new(),
            title: "Hatchling Study".to_string(),
            description: "Character study of the dragon hatchlings".to_string(),
            artwork_url: None,
            thumbnail_url: None,
            canvas_data: Some(canvas.clone()),
            tags: vec!["dragon".to_string(), "study".to_string()],
            campaign_id: active_campaign_id,
            creator_id: creator2_id,
            status: SubmissionStatus::Approved,
            reviewed_by: Some(reviewer_id),
            reviewed_at: Some(now - Duration::days(1)),
            feedback: Some("Lovely linework".to_string()),
            rating: Some(5),
            is_public: true,
            view_count: 42,
            like_count: 7,
            created_at: now - Duration::days(4),
            updated_at: now - Duration::days(1),
        },
        Submission {
            id: SubmissionId::new(),
            title: "Alley Rain Poster".to_string(),
            description: "Rain-soaked alley with the neon district skyline".to_string(),
            artwork_url: None,
            thumbnail_url: None,
            canvas_data: Some(canvas),
            tags: vec!["neon".to_string()],
            campaign_id: capped_campaign_id,
            creator_id: creator1_id,
            status: SubmissionStatus::Rejected,
            reviewed_by: Some(reviewer_id),
            reviewed_at: Some(now - Duration::hours(12)),
            feedback: Some("Landscape orientation, brief asks for portrait".to_string()),
            rating: Some(2),
            is_public: false,
            view_count: 3,
            like_count: 0,
            created_at: now - Duration::days(1),
            updated_at: now - Duration::hours(12),
        },
    ];
    for submission in &submissions {
        db.submissions().insert_submission(submission).await?;
    }

    db.bookmarks()
        .insert_bookmark(creator2_id, active_campaign_id)
        .await?;

    Ok(())
}
