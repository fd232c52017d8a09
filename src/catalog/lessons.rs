// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Syllabus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{
    Component, ContentBody, ContentEntry, ContentStore, CourseError, Difficulty, HowItWorks,
    PracticalExample, ProcessStep, RankingFactor, SeoType, TimelineEra,
};

use super::catalog_id;

pub fn content_store() -> Result<ContentStore, CourseError> {
    let lessons = [
        ("what-is-digital-marketing", what_is_digital_marketing()),
        ("evolution", evolution()),
        ("seo-fundamentals", seo_fundamentals()),
        ("keyword-research", keyword_research()),
        ("content-strategy", content_strategy()),
        ("social-strategy", social_strategy()),
        ("email-fundamentals", email_fundamentals()),
        ("ppc-basics", ppc_basics()),
        ("analytics-setup", analytics_setup()),
        ("conversion-optimization", conversion_optimization()),
    ];

    let mut store = ContentStore::new();
    for (section_id, entry) in lessons {
        store.insert(catalog_id(section_id)?, entry);
    }
    Ok(store)
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

fn component(title: &str, description: &str, example: &str) -> Component {
    Component {
        title: title.to_owned(),
        description: description.to_owned(),
        example: example.to_owned(),
    }
}

fn era(era: &str, focus: &str, channels: &str, example: &str) -> TimelineEra {
    TimelineEra {
        era: era.to_owned(),
        focus: focus.to_owned(),
        channels: channels.to_owned(),
        example: example.to_owned(),
    }
}

fn case_study(title: &str, scenario: &str, strategy: &[&str], results: &str) -> PracticalExample {
    PracticalExample {
        title: title.to_owned(),
        scenario: scenario.to_owned(),
        strategy: lines(strategy),
        results: results.to_owned(),
    }
}

/// The common lesson shape: definition, key takeaways and a case study.
fn standard_lesson(
    title: &str,
    duration: &str,
    difficulty: Difficulty,
    definition: &str,
    key_points: &[&str],
    practical_example: PracticalExample,
) -> ContentEntry {
    ContentEntry::new(
        title,
        duration,
        difficulty,
        ContentBody {
            definition: Some(definition.to_owned()),
            key_points: Some(lines(key_points)),
            practical_example: Some(practical_example),
            ..ContentBody::default()
        },
    )
}

fn what_is_digital_marketing() -> ContentEntry {
    ContentEntry::new(
        "What is Digital Marketing?",
        "15 min",
        Difficulty::Beginner,
        ContentBody {
            definition: Some(
                "Digital marketing is the use of digital channels, platforms, and technologies to \
                 promote products, services, and brands to consumers and businesses. It \
                 encompasses all marketing efforts that use an electronic device or the internet."
                    .to_owned(),
            ),
            key_points: Some(lines(&[
                "Uses digital channels like search engines, social media, email, and websites",
                "Allows for real-time interaction with customers",
                "Provides measurable results and data-driven insights",
                "Cost-effective compared to traditional marketing",
                "Enables global reach with targeted precision",
            ])),
            components: Some(vec![
                component(
                    "Search Engine Optimization (SEO)",
                    "Optimizing websites to rank higher in search engine results pages",
                    "A bakery optimizing their website for 'best cupcakes near me' to appear when \
                     locals search for baked goods",
                ),
                component(
                    "Pay-Per-Click Advertising (PPC)",
                    "Paid advertising where you pay each time someone clicks your ad",
                    "Running Google Ads for 'wedding photography' to capture couples planning \
                     their big day",
                ),
                component(
                    "Social Media Marketing",
                    "Using social platforms to build brand awareness and engage customers",
                    "A fitness brand sharing workout videos on Instagram to build a community of \
                     health enthusiasts",
                ),
                component(
                    "Content Marketing",
                    "Creating valuable content to attract and retain customers",
                    "A software company publishing tutorials and guides to help users succeed \
                     with their product",
                ),
                component(
                    "Email Marketing",
                    "Sending targeted messages to nurture leads and retain customers",
                    "An e-commerce store sending personalized product recommendations based on \
                     past purchases",
                ),
            ]),
            statistics: Some(lines(&[
                "4.9 billion people use the internet globally",
                "90% of consumers research products online before buying",
                "Digital marketing is 62% less expensive than traditional marketing",
                "Email marketing has an average ROI of $42 for every $1 spent",
            ])),
            practical_example: Some(case_study(
                "Case Study: Local Restaurant",
                "A local restaurant wants to increase customers and online orders",
                &[
                    "SEO: Optimize for 'best Italian restaurant [city name]'",
                    "Social Media: Share food photos and behind-the-scenes content",
                    "Email: Send weekly menu updates and special offers",
                    "PPC: Run ads for food delivery keywords",
                    "Content: Create blog posts about Italian cuisine and cooking tips",
                ],
                "40% increase in online orders, 25% growth in new customers, 60% boost in social \
                 media engagement",
            )),
            ..ContentBody::default()
        },
    )
}

fn evolution() -> ContentEntry {
    ContentEntry::new(
        "Evolution of Marketing",
        "12 min",
        Difficulty::Beginner,
        ContentBody {
            definition: Some(
                "Marketing has evolved from simple product announcements to sophisticated, \
                 data-driven, personalized customer experiences across multiple digital \
                 touchpoints."
                    .to_owned(),
            ),
            timeline: Some(vec![
                era(
                    "1950s-1960s: Product Era",
                    "Mass production and product features",
                    "Print ads, radio, early TV",
                    "Ford's Model T - 'Any color as long as it's black'",
                ),
                era(
                    "1970s-1980s: Brand Era",
                    "Brand identity and emotional connection",
                    "Television, magazines, billboards",
                    "Coca-Cola's 'I'd Like to Buy the World a Coke' campaign",
                ),
                era(
                    "1990s: Relationship Era",
                    "Customer relationships and loyalty programs",
                    "Direct mail, early email, customer databases",
                    "Amazon's recommendation engine and customer reviews",
                ),
                era(
                    "2000s: Digital Revolution",
                    "Online presence and search marketing",
                    "Websites, search engines, banner ads",
                    "Google AdWords launch transforming search advertising",
                ),
                era(
                    "2010s: Social & Mobile Era",
                    "Social engagement and mobile optimization",
                    "Social media, mobile apps, influencer marketing",
                    "Instagram's visual storytelling and influencer partnerships",
                ),
                era(
                    "2020s: AI & Personalization Era",
                    "Artificial intelligence and hyper-personalization",
                    "Voice search, chatbots, programmatic advertising",
                    "Netflix's AI-powered content recommendations",
                ),
            ]),
            key_shifts: Some(lines(&[
                "From interruption to permission marketing",
                "From mass marketing to personalization",
                "From one-way to two-way communication",
                "From brand-centric to customer-centric",
                "From intuition-based to data-driven decisions",
            ])),
            future_trends: Some(lines(&[
                "Voice search optimization",
                "Augmented and virtual reality marketing",
                "Blockchain for transparency",
                "Privacy-first marketing",
                "Sustainability and social responsibility",
            ])),
            ..ContentBody::default()
        },
    )
}

fn seo_fundamentals() -> ContentEntry {
    let step = |step: &str, description: &str, analogy: &str| ProcessStep {
        step: step.to_owned(),
        description: description.to_owned(),
        analogy: analogy.to_owned(),
    };
    let factor = |category: &str, factors: &[&str], weight: &str, example: &str| RankingFactor {
        category: category.to_owned(),
        factors: lines(factors),
        weight: weight.to_owned(),
        example: example.to_owned(),
    };
    let seo_type = |name: &str, description: &str, tactics: &[&str], example: &str| SeoType {
        name: name.to_owned(),
        description: description.to_owned(),
        tactics: lines(tactics),
        example: example.to_owned(),
    };

    ContentEntry::new(
        "SEO Fundamentals",
        "20 min",
        Difficulty::Intermediate,
        ContentBody {
            definition: Some(
                "Search Engine Optimization (SEO) is the practice of optimizing websites and \
                 content to rank higher in search engine results pages (SERPs) organically, \
                 without paying for placement."
                    .to_owned(),
            ),
            how_it_works: Some(HowItWorks {
                title: "How Search Engines Work".to_owned(),
                steps: vec![
                    step(
                        "Crawling",
                        "Search engines send bots to discover and scan web pages",
                        "Like a library cataloger browsing through books to understand what's \
                         available",
                    ),
                    step(
                        "Indexing",
                        "Pages are analyzed and stored in the search engine's database",
                        "Creating detailed card catalogs with summaries of each book's content",
                    ),
                    step(
                        "Ranking",
                        "Algorithms determine which pages best answer user queries",
                        "A librarian recommending the most relevant books for your research topic",
                    ),
                ],
            }),
            ranking_factors: Some(vec![
                factor(
                    "Content Quality",
                    &[
                        "Relevance to search query",
                        "Comprehensive coverage of topic",
                        "Freshness and accuracy",
                        "User engagement metrics",
                    ],
                    "35%",
                    "A detailed guide on 'how to train a puppy' that covers all aspects \
                     comprehensively",
                ),
                factor(
                    "Technical SEO",
                    &[
                        "Page load speed",
                        "Mobile responsiveness",
                        "SSL certificate",
                        "Site architecture",
                    ],
                    "25%",
                    "A website that loads in under 3 seconds on mobile devices",
                ),
                factor(
                    "Backlinks",
                    &[
                        "Quality of linking sites",
                        "Relevance of links",
                        "Anchor text diversity",
                        "Link authority",
                    ],
                    "25%",
                    "Getting linked by authoritative sites like industry publications or \
                     universities",
                ),
                factor(
                    "User Experience",
                    &["Click-through rates", "Bounce rate", "Time on page", "Core Web Vitals"],
                    "15%",
                    "Users spending 5+ minutes reading your article instead of immediately leaving",
                ),
            ]),
            seo_types: Some(vec![
                seo_type(
                    "On-Page SEO",
                    "Optimizing individual pages for target keywords",
                    &[
                        "Title tag optimization",
                        "Meta descriptions",
                        "Header structure (H1, H2, H3)",
                        "Internal linking",
                        "Keyword placement",
                    ],
                    "Optimizing a blog post about 'best coffee beans' with proper headings and \
                     related keywords",
                ),
                seo_type(
                    "Technical SEO",
                    "Improving website's technical foundation",
                    &[
                        "Site speed optimization",
                        "Mobile optimization",
                        "XML sitemaps",
                        "Robots.txt",
                        "Schema markup",
                    ],
                    "Implementing structured data to help search engines understand your product \
                     pages",
                ),
                seo_type(
                    "Off-Page SEO",
                    "Building authority and trust through external signals",
                    &[
                        "Link building",
                        "Social signals",
                        "Brand mentions",
                        "Local citations",
                        "Guest posting",
                    ],
                    "Getting featured in industry publications with links back to your expertise",
                ),
            ]),
            practical_steps: Some(lines(&[
                "Conduct keyword research to understand what your audience searches for",
                "Create high-quality, comprehensive content around those keywords",
                "Optimize page titles, meta descriptions, and headers",
                "Build internal links between related pages",
                "Improve site speed and mobile experience",
                "Earn quality backlinks from relevant websites",
                "Monitor performance and adjust strategy based on data",
            ])),
            ..ContentBody::default()
        },
    )
}

fn keyword_research() -> ContentEntry {
    standard_lesson(
        "Keyword Research",
        "18 min",
        Difficulty::Intermediate,
        "Keyword research is the process of finding and analyzing search terms that people enter \
         into search engines with the goal of using that data to optimize content for better \
         search rankings.",
        &[
            "Foundation of all SEO and content marketing efforts",
            "Reveals what your audience is actively searching for",
            "Helps identify market opportunities and content gaps",
            "Enables strategic content planning and optimization",
            "Critical for PPC campaign success and cost management",
        ],
        case_study(
            "Case Study: Local Bakery Keyword Research",
            "A local bakery wants to attract more customers through search",
            &[
                "Target 'custom birthday cakes [city]' - low competition, high intent",
                "Create content for 'how to order custom cake' - informational intent",
                "Optimize for 'best bakery [city]' - high value local keyword",
                "Target seasonal: 'Christmas cookies delivery', 'Valentine's Day cakes'",
            ],
            "300% increase in organic traffic, 150% boost in online orders, ranking #1 for 5 \
             local keywords",
        ),
    )
}

fn content_strategy() -> ContentEntry {
    standard_lesson(
        "Content Strategy",
        "18 min",
        Difficulty::Intermediate,
        "Content strategy is the planning, development, and management of content\u{2014}written \
         or in other media\u{2014}to achieve specific business goals while serving your \
         audience's needs.",
        &[
            "Aligns content creation with business objectives",
            "Ensures consistency across all content touchpoints",
            "Maximizes content ROI through strategic planning",
            "Builds brand authority and customer trust",
            "Drives measurable business results",
        ],
        case_study(
            "Case Study: SaaS Content Strategy",
            "B2B SaaS company wants to increase trial signups and reduce churn",
            &[
                "Awareness Stage: SEO blog posts addressing industry challenges",
                "Consideration Stage: Comparison guides and case studies",
                "Decision Stage: Free trial content and demo videos",
                "Retention Stage: Onboarding guides and advanced tutorials",
            ],
            "40% increase in trial signups, 25% reduction in churn, 60% more qualified leads from \
             content",
        ),
    )
}

fn social_strategy() -> ContentEntry {
    standard_lesson(
        "Social Media Strategy",
        "17 min",
        Difficulty::Intermediate,
        "Social media strategy is a comprehensive plan that outlines how to use social media \
         platforms to achieve business goals, build brand awareness, engage with customers, and \
         drive measurable results.",
        &[
            "Aligns social media efforts with overall business objectives",
            "Defines target audience and platform selection",
            "Establishes consistent brand voice and visual identity",
            "Creates frameworks for content creation and engagement",
            "Enables measurement and optimization of social media ROI",
        ],
        case_study(
            "Case Study: E-commerce Social Strategy",
            "Online jewelry store wants to increase brand awareness and sales among millennials",
            &[
                "Platform Selection: Instagram (primary), Pinterest (secondary), TikTok \
                 (experimental)",
                "Content Mix: Product styling (40%), customer stories (30%), behind-scenes (20%), \
                 promotions (10%)",
                "Engagement Focus: Respond within 2 hours, encourage user-generated content",
            ],
            "200% increase in social followers, 150% boost in website traffic from social, 85% \
             increase in social-driven sales",
        ),
    )
}

fn email_fundamentals() -> ContentEntry {
    standard_lesson(
        "Email Marketing Fundamentals",
        "15 min",
        Difficulty::Beginner,
        "Email marketing is a digital marketing strategy that involves sending targeted emails to \
         prospects and customers to build relationships, promote products or services, and drive \
         business growth.",
        &[
            "Highest ROI of all digital marketing channels ($42 for every $1 spent)",
            "Direct communication channel you own (unlike social media)",
            "Highly personalized and segmentable",
            "Measurable with detailed analytics",
            "Scalable from small businesses to enterprises",
        ],
        case_study(
            "Case Study: E-learning Platform Email Strategy",
            "Online course platform wants to increase course completion rates and reduce churn",
            &[
                "Welcome Series: 5-email onboarding sequence for new students",
                "Progress Nudges: Automated emails when students fall behind",
                "Achievement Celebrations: Emails celebrating milestones and completions",
                "Re-engagement: Win-back campaign for inactive students",
            ],
            "45% increase in course completion, 30% reduction in churn, 60% higher student \
             satisfaction",
        ),
    )
}

fn ppc_basics() -> ContentEntry {
    standard_lesson(
        "PPC Fundamentals",
        "16 min",
        Difficulty::Intermediate,
        "Pay-Per-Click (PPC) advertising is a digital marketing model where advertisers pay a fee \
         each time their ad is clicked, essentially buying visits to their site rather than \
         earning them organically.",
        &[
            "Immediate visibility in search results and social feeds",
            "Highly targeted based on demographics, interests, and behavior",
            "Complete budget control with flexible spending limits",
            "Measurable ROI with detailed performance tracking",
            "Faster results compared to organic marketing efforts",
        ],
        case_study(
            "Case Study: B2B Software PPC Campaign",
            "Project management software wants to acquire new business customers",
            &[
                "Google Ads: Target high-intent keywords like 'project management software'",
                "LinkedIn Ads: Target decision-makers in specific industries",
                "Retargeting: Re-engage website visitors who didn't convert",
                "Landing Page Optimization: Create dedicated pages for each campaign",
            ],
            "250% increase in qualified leads, 35% lower cost per acquisition, 180% ROI",
        ),
    )
}

fn analytics_setup() -> ContentEntry {
    standard_lesson(
        "Analytics Setup",
        "18 min",
        Difficulty::Intermediate,
        "Analytics setup involves implementing tracking systems to measure, collect, analyze, and \
         report web data to understand and optimize digital marketing performance.",
        &[
            "Provides data-driven insights for decision making",
            "Tracks customer journey across all touchpoints",
            "Measures ROI of marketing campaigns and channels",
            "Identifies opportunities for optimization",
            "Enables audience segmentation and personalization",
        ],
        case_study(
            "Case Study: E-commerce Analytics Implementation",
            "Online retailer wants to understand customer behavior and optimize conversions",
            &[
                "Google Analytics 4: Track website behavior and conversions",
                "Google Tag Manager: Manage all tracking codes centrally",
                "Enhanced Ecommerce: Track purchase funnel and product performance",
                "Custom Dashboards: Create executive summary reports",
            ],
            "Identified 40% cart abandonment rate, optimized checkout flow, increased conversions \
             by 25%",
        ),
    )
}

fn conversion_optimization() -> ContentEntry {
    standard_lesson(
        "Conversion Rate Optimization",
        "25 min",
        Difficulty::Advanced,
        "Conversion Rate Optimization (CRO) is the systematic process of increasing the \
         percentage of website visitors who complete desired actions, such as making a purchase \
         or filling out a form.",
        &[
            "Improves ROI without increasing traffic costs",
            "Uses data and testing to make informed decisions",
            "Focuses on user experience and removing friction",
            "Provides continuous improvement methodology",
            "Impacts bottom line directly through increased conversions",
        ],
        case_study(
            "Case Study: SaaS Landing Page Optimization",
            "Software company's trial signup page has low conversion rate",
            &[
                "A/B Test Headlines: Test benefit-focused vs feature-focused messaging",
                "Form Optimization: Reduce form fields from 8 to 3",
                "Social Proof: Add customer testimonials and usage statistics",
                "CTA Testing: Test button colors, text, and placement",
            ],
            "127% increase in trial signups, 43% improvement in qualified leads, $2M additional \
             revenue",
        ),
    )
}
