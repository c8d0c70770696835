//! Built-in decomposition templates, one per archetype.
//!
//! Entries are listed in selection precedence. Every `depends_on` index
//! points at an earlier step, which keeps instantiated graphs acyclic and
//! keeps the `core_steps` prefix closed under its own dependencies.

use crate::template::{Archetype, Durations, SkeletonStep, Template};

pub static CATALOG: [Template; 8] = [
    Template {
        archetype: Archetype::WebProject,
        id_prefix: "web",
        triggers: &[
            "website",
            "web site",
            "web app",
            "webapp",
            "web page",
            "webpage",
            "landing page",
            "frontend",
            "backend",
            "software",
            "mobile app",
        ],
        core_steps: 4,
        steps: &[
            SkeletonStep {
                title: "Define requirements",
                description: "List the pages, features and constraints the project must satisfy.",
                durations: Durations::all(30, 60, 120, 240),
                depends_on: &[],
            },
            SkeletonStep {
                title: "Design the interface",
                description: "Sketch the information architecture, page layouts and visual style.",
                durations: Durations::all(45, 90, 180, 360),
                depends_on: &[0],
            },
            SkeletonStep {
                title: "Set up the project",
                description: "Create the repository, tooling, hosting and build pipeline.",
                durations: Durations::all(20, 45, 90, 120),
                depends_on: &[0],
            },
            SkeletonStep {
                title: "Build core features",
                description: "Implement the main pages and features against the design.",
                durations: Durations::all(60, 180, 480, 960),
                depends_on: &[1, 2],
            },
            SkeletonStep {
                title: "Integrate content and data",
                description: "Wire in real content, data sources and third-party services.",
                durations: Durations::from_moderate(90, 240, 480),
                depends_on: &[3],
            },
            SkeletonStep {
                title: "Test across devices",
                description: "Check behaviour and layout on the target browsers and screen sizes.",
                durations: Durations::from_moderate(60, 180, 360),
                depends_on: &[3],
            },
            SkeletonStep {
                title: "Optimize performance and SEO",
                description: "Tune load times, accessibility and search metadata.",
                durations: Durations::from_moderate(45, 120, 240),
                depends_on: &[4, 5],
            },
            SkeletonStep {
                title: "Deploy and monitor",
                description: "Ship to production and watch errors and traffic after release.",
                durations: Durations::all(15, 30, 90, 180),
                depends_on: &[6],
            },
        ],
    },
    Template {
        archetype: Archetype::Presentation,
        id_prefix: "pres",
        triggers: &["presentation", "slide", "deck", "keynote", "pitch", "talk"],
        core_steps: 4,
        steps: &[
            SkeletonStep {
                title: "Define audience and key message",
                description: "Decide who the presentation is for and the one thing they should remember.",
                durations: Durations::all(15, 30, 45, 60),
                depends_on: &[],
            },
            SkeletonStep {
                title: "Gather supporting material",
                description: "Collect data, examples and visuals that back the message.",
                durations: Durations::all(20, 45, 90, 120),
                depends_on: &[0],
            },
            SkeletonStep {
                title: "Outline the storyline",
                description: "Arrange the sections into a narrative with a clear opening and close.",
                durations: Durations::all(15, 30, 60, 90),
                depends_on: &[0],
            },
            SkeletonStep {
                title: "Build the slides",
                description: "Turn the outline into slides using the gathered material.",
                durations: Durations::all(45, 90, 180, 300),
                depends_on: &[1, 2],
            },
            SkeletonStep {
                title: "Rehearse the delivery",
                description: "Run through the talk out loud and check the timing.",
                durations: Durations::from_moderate(30, 60, 120),
                depends_on: &[3],
            },
            SkeletonStep {
                title: "Collect feedback and polish",
                description: "Present to a colleague and fold their feedback into the deck.",
                durations: Durations::from_moderate(20, 45, 90),
                depends_on: &[4],
            },
        ],
    },
    Template {
        archetype: Archetype::Report,
        id_prefix: "report",
        triggers: &[
            "report",
            "analysis",
            "whitepaper",
            "white paper",
            "audit",
            "findings",
            "summary",
        ],
        core_steps: 4,
        steps: &[
            SkeletonStep {
                title: "Scope the questions",
                description: "Write down the questions the report has to answer and for whom.",
                durations: Durations::all(15, 30, 60, 90),
                depends_on: &[],
            },
            SkeletonStep {
                title: "Collect data and sources",
                description: "Gather the data sets, documents and interviews the analysis needs.",
                durations: Durations::all(30, 90, 180, 360),
                depends_on: &[0],
            },
            SkeletonStep {
                title: "Analyze the findings",
                description: "Work through the data and note the conclusions it supports.",
                durations: Durations::all(30, 60, 180, 300),
                depends_on: &[1],
            },
            SkeletonStep {
                title: "Draft the report",
                description: "Write up the findings, method and recommendations.",
                durations: Durations::all(45, 90, 180, 300),
                depends_on: &[2],
            },
            SkeletonStep {
                title: "Create charts and visuals",
                description: "Produce the figures and tables that illustrate the findings.",
                durations: Durations::from_moderate(30, 60, 120),
                depends_on: &[2],
            },
            SkeletonStep {
                title: "Review and finalize",
                description: "Check accuracy, integrate the visuals and prepare the final version.",
                durations: Durations::from_moderate(30, 60, 120),
                depends_on: &[3, 4],
            },
        ],
    },
    Template {
        archetype: Archetype::Event,
        id_prefix: "event",
        triggers: &[
            "meeting",
            "offsite",
            "off-site",
            "conference",
            "party",
            "workshop",
            "wedding",
            "summit",
            "retreat",
            "meetup",
        ],
        core_steps: 4,
        steps: &[
            SkeletonStep {
                title: "Define goals, date and budget",
                description: "Agree on the purpose of the event, when it happens and what it may cost.",
                durations: Durations::all(15, 30, 60, 120),
                depends_on: &[],
            },
            SkeletonStep {
                title: "Draft the guest list",
                description: "Decide who attends and collect their contact details.",
                durations: Durations::all(10, 20, 45, 90),
                depends_on: &[0],
            },
            SkeletonStep {
                title: "Book the venue",
                description: "Compare options and reserve a venue that fits the group and budget.",
                durations: Durations::all(20, 45, 90, 180),
                depends_on: &[0],
            },
            SkeletonStep {
                title: "Send invitations",
                description: "Invite the guests with the date, venue and RSVP details.",
                durations: Durations::all(10, 30, 60, 90),
                depends_on: &[1, 2],
            },
            SkeletonStep {
                title: "Arrange catering and logistics",
                description: "Order food, equipment and travel for the attendees.",
                durations: Durations::from_moderate(45, 90, 180),
                depends_on: &[2],
            },
            SkeletonStep {
                title: "Prepare the agenda and materials",
                description: "Plan the schedule, speakers and any handouts.",
                durations: Durations::from_moderate(30, 90, 180),
                depends_on: &[2],
            },
            SkeletonStep {
                title: "Run the event and follow up",
                description: "Host the event, then send thanks and any follow-up notes.",
                durations: Durations::from_moderate(60, 120, 240),
                depends_on: &[3, 4, 5],
            },
        ],
    },
    Template {
        archetype: Archetype::Launch,
        id_prefix: "launch",
        triggers: &["launch", "release", "go-live", "go live", "rollout", "roll out"],
        core_steps: 4,
        steps: &[
            SkeletonStep {
                title: "Define launch goals and audience",
                description: "Set the success criteria and the audience the launch targets.",
                durations: Durations::all(20, 45, 90, 180),
                depends_on: &[],
            },
            SkeletonStep {
                title: "Finalize the product",
                description: "Close out remaining work so the product is ready to release.",
                durations: Durations::all(60, 180, 480, 960),
                depends_on: &[0],
            },
            SkeletonStep {
                title: "Prepare launch messaging",
                description: "Write the announcement, release notes and marketing copy.",
                durations: Durations::all(30, 60, 120, 240),
                depends_on: &[0],
            },
            SkeletonStep {
                title: "Announce and release",
                description: "Publish the release and the announcement together.",
                durations: Durations::all(15, 30, 60, 120),
                depends_on: &[1, 2],
            },
            SkeletonStep {
                title: "Brief support and sales",
                description: "Walk the customer-facing teams through what is changing.",
                durations: Durations::from_moderate(30, 60, 120),
                depends_on: &[2],
            },
            SkeletonStep {
                title: "Set up launch metrics",
                description: "Instrument the dashboards that show whether the launch is working.",
                durations: Durations::from_moderate(30, 60, 120),
                depends_on: &[0],
            },
            SkeletonStep {
                title: "Coordinate launch-day operations",
                description: "Staff the launch window and respond to issues as they come in.",
                durations: Durations::from_moderate(60, 120, 240),
                depends_on: &[3, 4, 5],
            },
            SkeletonStep {
                title: "Run a post-launch review",
                description: "Compare the results against the goals and record lessons learned.",
                durations: Durations::from_moderate(30, 60, 120),
                depends_on: &[6],
            },
        ],
    },
    Template {
        archetype: Archetype::Learning,
        id_prefix: "learn",
        triggers: &[
            "learn",
            "study",
            "course",
            "tutorial",
            "certification",
            "exams",
            "practice",
            "skill",
        ],
        core_steps: 3,
        steps: &[
            SkeletonStep {
                title: "Set learning goals",
                description: "Decide what you want to be able to do and by when.",
                durations: Durations::span(15, 60),
                depends_on: &[],
            },
            SkeletonStep {
                title: "Find resources",
                description: "Pick the books, courses or mentors to learn from.",
                durations: Durations::all(20, 30, 60, 90),
                depends_on: &[0],
            },
            SkeletonStep {
                title: "Work through the fundamentals",
                description: "Study the core concepts in order, taking notes as you go.",
                durations: Durations::all(60, 180, 480, 960),
                depends_on: &[1],
            },
            SkeletonStep {
                title: "Practice with exercises",
                description: "Apply the concepts on exercises of increasing difficulty.",
                durations: Durations::from_moderate(120, 240, 480),
                depends_on: &[2],
            },
            SkeletonStep {
                title: "Build a capstone project",
                description: "Use the new skill end to end on a small real project.",
                durations: Durations::from_moderate(120, 360, 720),
                depends_on: &[3],
            },
            SkeletonStep {
                title: "Review and assess progress",
                description: "Check your progress against the goals and plan what comes next.",
                durations: Durations::from_moderate(30, 60, 120),
                depends_on: &[4],
            },
        ],
    },
    Template {
        archetype: Archetype::Writing,
        id_prefix: "write",
        triggers: &[
            "write",
            "writing",
            "blog",
            "article",
            "essay",
            "book",
            "newsletter",
            "novel",
            "story",
            "draft",
        ],
        core_steps: 3,
        steps: &[
            SkeletonStep {
                title: "Research the topic",
                description: "Read up on the subject and collect notes and sources.",
                durations: Durations::all(20, 45, 90, 180),
                depends_on: &[],
            },
            SkeletonStep {
                title: "Outline the piece",
                description: "Lay out the sections and the argument they build.",
                durations: Durations::all(15, 30, 45, 90),
                depends_on: &[0],
            },
            SkeletonStep {
                title: "Write the first draft",
                description: "Get the whole piece down without stopping to polish.",
                durations: Durations::all(45, 120, 240, 480),
                depends_on: &[1],
            },
            SkeletonStep {
                title: "Revise and edit",
                description: "Tighten structure and wording across the draft.",
                durations: Durations::from_moderate(60, 120, 240),
                depends_on: &[2],
            },
            SkeletonStep {
                title: "Add references and visuals",
                description: "Insert citations, links and images where they help.",
                durations: Durations::from_moderate(30, 60, 120),
                depends_on: &[2],
            },
            SkeletonStep {
                title: "Proofread and publish",
                description: "Do a final read for errors and publish the piece.",
                durations: Durations::from_moderate(20, 45, 90),
                depends_on: &[3, 4],
            },
        ],
    },
    Template {
        archetype: Archetype::Generic,
        id_prefix: "task",
        triggers: &[],
        core_steps: 3,
        steps: &[
            SkeletonStep {
                title: "Clarify the goal",
                description: "Write down what done looks like for this task.",
                durations: Durations::span(10, 60),
                depends_on: &[],
            },
            SkeletonStep {
                title: "Gather what you need",
                description: "Collect the information, tools and people the task requires.",
                durations: Durations::all(10, 20, 45, 90),
                depends_on: &[0],
            },
            SkeletonStep {
                title: "Do the work",
                description: "Carry out the main part of the task.",
                durations: Durations::all(30, 90, 180, 360),
                depends_on: &[1],
            },
            SkeletonStep {
                title: "Review the result",
                description: "Check the outcome against the goal and fix any gaps.",
                durations: Durations::from_moderate(20, 45, 90),
                depends_on: &[2],
            },
            SkeletonStep {
                title: "Wrap up and follow up",
                description: "Tell the people involved and note any follow-up work.",
                durations: Durations::from_moderate(10, 30, 60),
                depends_on: &[3],
            },
        ],
    },
];
