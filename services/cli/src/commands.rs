use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use tripr_catalog::{builtin_trips, Season, SpotCatalog};
use tripr_client::{ChatSession, ItineraryView, Sender, TripClient};
use tripr_common::types::{BudgetTier, GroupMember, Preferences, UserPreferences};
use tripr_filter::{filter_and_sort, suggest_spots};
use tripr_render::{render, TextSurface, SPOTS_EMPTY_MESSAGE, TRIPS_EMPTY_MESSAGE};
use tripr_state::{reduce, Action, PlannerState, SuggestForm, TripFilterForm};

#[derive(Args, Debug)]
pub struct SpotsArgs {
    /// Preference tag, e.g. adventure or beaches
    #[arg(short, long)]
    preference: String,

    /// Budget per person
    #[arg(short, long)]
    budget: String,

    /// Number of travelers
    #[arg(short = 'n', long)]
    people: String,

    /// none, price_asc, price_desc or rating
    #[arg(long, default_value = "")]
    sort: String,
}

#[derive(Args, Debug)]
pub struct TripsArgs {
    /// Text to look for in the trip title
    #[arg(short, long, default_value = "")]
    query: String,

    #[arg(long, default_value = "")]
    location: String,

    #[arg(long, default_value = "0")]
    min_price: String,

    #[arg(long, default_value = "10000")]
    max_price: String,

    #[arg(long, default_value = "0")]
    min_rating: String,

    /// Repeat to allow several seasons
    #[arg(long = "season")]
    seasons: Vec<Season>,

    #[arg(long, default_value = "")]
    sort: String,
}

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// The message to send
    #[arg(required = true, num_args = 1..)]
    message: Vec<String>,
}

#[derive(Args, Debug)]
pub struct PrefsArgs {
    #[command(subcommand)]
    action: PrefsAction,
}

#[derive(Subcommand, Debug)]
enum PrefsAction {
    /// Show the stored interests and budget
    Get(UserArg),
    /// Toggle interests or change the budget, then save
    Set(PrefsSetArgs),
}

#[derive(Args, Debug)]
struct UserArg {
    /// Profile to read or write
    #[arg(short, long, default_value = "default")]
    user: String,
}

#[derive(Args, Debug)]
struct PrefsSetArgs {
    #[command(flatten)]
    user: UserArg,

    /// Interest tag to flip; repeatable
    #[arg(short, long = "toggle")]
    toggles: Vec<String>,

    /// cheap, moderate or luxury
    #[arg(short, long)]
    budget: Option<BudgetTier>,
}

#[derive(Args, Debug)]
pub struct GroupArgs {
    #[command(subcommand)]
    action: GroupAction,
}

#[derive(Subcommand, Debug)]
enum GroupAction {
    /// List the travel group
    List,
    /// Add a member; the name defaults to "Traveler N"
    Add(GroupAddArgs),
}

#[derive(Args, Debug)]
struct GroupAddArgs {
    #[arg(long)]
    name: Option<String>,

    /// Interest tag of the new member; repeatable
    #[arg(short, long = "prefer")]
    preferences: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ItineraryArgs {
    /// cheap, moderate or luxury
    #[arg(short, long, default_value_t = BudgetTier::Moderate)]
    budget: BudgetTier,

    /// Interest tag to select; repeatable
    #[arg(short, long = "prefer")]
    preferences: Vec<String>,
}

pub fn spots(args: SpotsArgs) -> Result<()> {
    let form = SuggestForm {
        preference: args.preference,
        budget: args.budget,
        people: args.people,
        sort: args.sort,
    };
    let query = form.parse()?;
    let outcome = suggest_spots(SpotCatalog::builtin(), &query);
    if let Some(tag) = query.preference.as_ref().filter(|_| outcome.fallback) {
        eprintln!("Nothing fits that budget; showing every {} spot.", tag.label());
    }

    let mut surface = TextSurface::new();
    render(&mut surface, &outcome.items, SPOTS_EMPTY_MESSAGE);
    print!("{surface}");
    Ok(())
}

pub fn trips(args: TripsArgs) -> Result<()> {
    let form = TripFilterForm {
        q: args.query,
        location: args.location,
        min_price: args.min_price,
        max_price: args.max_price,
        min_rating: args.min_rating,
        seasons: String::new(),
        sort: args.sort,
    };

    let mut state = reduce(&PlannerState::default(), Action::ApplyQuery(form.parse()?));
    for season in args.seasons {
        if !state.query.seasons.contains(&season) {
            state = reduce(&state, Action::ToggleSeason(season));
        }
    }

    let trips = filter_and_sort(&builtin_trips(), &state.query);
    let mut surface = TextSurface::new();
    render(&mut surface, &trips, TRIPS_EMPTY_MESSAGE);
    print!("{surface}");
    Ok(())
}

pub async fn chat(api_url: &str, args: ChatArgs) -> Result<()> {
    let client = TripClient::new(api_url).context("building API client")?;
    let mut session = ChatSession::new();
    session.send(&client, &args.message.join(" ")).await;

    for message in session.messages() {
        let who = match message.sender {
            Sender::User => "you",
            Sender::Ai => "assistant",
        };
        println!("{who}: {}", message.text);
    }
    Ok(())
}

pub async fn itinerary(api_url: &str, args: ItineraryArgs) -> Result<()> {
    let client = TripClient::new(api_url).context("building API client")?;

    let mut state = reduce(&PlannerState::default(), Action::SetBudget(args.budget));
    for tag in args.preferences {
        if !state.preferences.is_selected(&tag) {
            state = reduce(&state, Action::TogglePreference(tag));
        }
    }
    tracing::debug!(budget = %state.budget, "requesting itinerary");

    let mut view = ItineraryView::new();
    view.generate(&client, &state.preferences, state.budget).await;
    print!("{view}");
    Ok(())
}

pub async fn prefs(api_url: &str, args: PrefsArgs) -> Result<()> {
    let client = TripClient::new(api_url).context("building API client")?;
    let stored = match args.action {
        PrefsAction::Get(UserArg { user }) => client
            .get_preferences(&user)
            .await
            .with_context(|| format!("loading preferences for {user}"))?,
        PrefsAction::Set(set) => {
            let current = client
                .get_preferences(&set.user.user)
                .await
                .with_context(|| format!("loading preferences for {}", set.user.user))?;
            let next = apply_preference_changes(current, set.toggles, set.budget);
            client
                .save_preferences(&set.user.user, &next)
                .await
                .context("saving preferences")?;
            next
        }
    };

    println!("Budget: {} ({})", stored.budget.label(), stored.budget);
    println!("Interests: {}", describe_interests(&stored.preferences));
    Ok(())
}

pub async fn group(api_url: &str, args: GroupArgs) -> Result<()> {
    let client = TripClient::new(api_url).context("building API client")?;
    let members = match args.action {
        GroupAction::List => client.list_group().await.context("listing group")?,
        GroupAction::Add(add) => add_member(&client, add).await?,
    };

    if members.is_empty() {
        println!("No group members yet.");
    }
    for member in &members {
        println!("{}: {}", member.name, describe_interests(&member.preferences));
    }
    Ok(())
}

async fn add_member(client: &TripClient, args: GroupAddArgs) -> Result<Vec<GroupMember>> {
    let name = match args.name {
        Some(name) => name,
        None => {
            let current = client.list_group().await.context("listing group")?;
            default_member_name(current.len())
        }
    };

    let mut state = PlannerState::default();
    for tag in args.preferences {
        if !state.preferences.is_selected(&tag) {
            state = reduce(&state, Action::TogglePreference(tag));
        }
    }

    let member = GroupMember {
        name,
        preferences: state.preferences,
    };
    let members = client
        .add_group_member(&member)
        .await
        .context("adding group member")?;
    Ok(members)
}

/// Name given to a new member of a group that has `count` members.
fn default_member_name(count: usize) -> String {
    format!("Traveler {}", count + 1)
}

fn apply_preference_changes(
    current: UserPreferences,
    toggles: Vec<String>,
    budget: Option<BudgetTier>,
) -> UserPreferences {
    let mut state = PlannerState {
        preferences: current.preferences,
        budget: current.budget,
        ..PlannerState::default()
    };
    for key in toggles {
        state = reduce(&state, Action::TogglePreference(key));
    }
    if let Some(tier) = budget {
        state = reduce(&state, Action::SetBudget(tier));
    }
    UserPreferences {
        preferences: state.preferences,
        budget: state.budget,
    }
}

fn describe_interests(preferences: &Preferences) -> String {
    let selected: Vec<&str> = preferences.selected().collect();
    if selected.is_empty() {
        "None".to_owned()
    } else {
        selected.join(", ")
    }
}
