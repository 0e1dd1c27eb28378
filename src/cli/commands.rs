//! Command handlers
//!
//! Each handler enters its screen through the guard, then drives the same
//! view the browser front end uses.

use anyhow::{anyhow, bail, Context as _, Result};
use std::io::Write;
use std::path::Path;

use electra::api::Attachment;
use electra::display::{format_timestamp, or_dash, DASH};
use electra::forms::{
    AdminSignupForm, CandidacyForm, LoginForm, NewVoterForm, NotificationForm, ReportForm,
    SignupForm,
};
use electra::model::{ApplicationStatus, ApplicationsQuery, CandidateApplication};
use electra::router::{settle, Route};
use electra::session::{clear_session, Role};
use electra::views::{
    self, ApplicationsBoard, CandidacySummary, CandidacyView, NominationPortal, NotificationFeed,
    ResultsView, Saved, VoterRoster, ADMIN_TILES, VOTER_TILES, VOTING_PLACEHOLDER,
};
use electra::{generate_default_config, ViewError};

use super::output::Table;
use super::{
    ApplicationAction, Commands, ElectionAction, NotificationAction, Shell, VoterAction,
};

pub async fn dispatch(shell: &mut Shell, command: Commands) -> Result<()> {
    let result = run_command(shell, command).await;

    match result {
        Err(e)
            if e
                .downcast_ref::<ViewError>()
                .is_some_and(ViewError::is_unauthorized) =>
        {
            clear_session(&mut shell.store)?;
            bail!("{}. Your session has ended; run `electra login` again.", e)
        }
        other => other,
    }
}

async fn run_command(shell: &mut Shell, command: Commands) -> Result<()> {
    match command {
        Commands::Login {
            role,
            email,
            password,
        } => {
            shell.enter(Route::Login)?;
            let form = LoginForm {
                email,
                password: password_or_prompt(password)?,
                role,
            };
            let ctx = views::login(&shell.api()?, &mut shell.store, &form).await?;
            println!("Signed in as {} ({})", ctx.display_name(), ctx.role);
            println!("Next: {}", Route::dashboard_for(ctx.role).title());
        }

        Commands::Logout => {
            let route = views::logout(&mut shell.store)?;
            println!("Signed out. Back to {}.", route.title());
        }

        Commands::Signup {
            admin,
            voter_id,
            name,
            email,
            password,
        } => {
            let password = password_or_prompt(password)?;
            let message = if admin {
                shell.enter(Route::AdminSignup)?;
                let form = AdminSignupForm {
                    name: name.unwrap_or_default(),
                    email,
                    confirm_password: password.clone(),
                    password,
                };
                views::admin_signup(&shell.api()?, &form).await?
            } else {
                shell.enter(Route::Signup)?;
                let form = SignupForm {
                    voter_id: voter_id.unwrap_or_default(),
                    email,
                    confirm_password: password.clone(),
                    password,
                };
                views::signup(&shell.api()?, &form).await?
            };
            println!("{}", message);
        }

        Commands::Whoami => match &shell.context {
            Some(ctx) => {
                println!("Name:     {}", ctx.display_name());
                println!("Role:     {}", ctx.role);
                println!("Email:    {}", or_dash(ctx.email.as_deref()));
                if ctx.role == Role::Voter {
                    println!("Voter ID: {}", or_dash(ctx.voter_id.as_deref()));
                }
                println!("Session:  {}", shell.store.path().display());
            }
            None => println!("Not signed in."),
        },

        Commands::Open { path } => {
            let route = settle(&shell.session, &path);
            println!("{} -> {} ({})", path, route, route.title());
            if route == Route::AdminVoting {
                println!("{}", VOTING_PLACEHOLDER);
            }
        }

        Commands::Dashboard => dashboard(shell).await?,

        Commands::Voters { action } => voters(shell, action).await?,

        Commands::Apply {
            position,
            statement,
            identity_proof,
            membership_proof,
            supporting_document,
            photo,
            symbol,
            experience,
            accept_declaration,
        } => {
            shell.enter(Route::CandidateApplication)?;
            let form = CandidacyForm {
                position,
                symbol,
                statement,
                experience,
                declaration: accept_declaration,
                identity_proof: attachment(identity_proof.as_deref())?,
                membership_proof: attachment(membership_proof.as_deref())?,
                supporting_document: attachment(supporting_document.as_deref())?,
                candidate_photo: attachment(photo.as_deref())?,
            };

            let api = shell.api()?;
            let mut view = CandidacyView::load(&api).await?;
            print_saved(view.submit(&api, form).await?);
            if let Some(app) = view.application() {
                print_application(app);
            }
        }

        Commands::Application => {
            shell.enter(Route::CandidateApplication)?;
            let view = CandidacyView::load(&shell.api()?).await?;
            print_candidacy(&view);
        }

        Commands::Applications { action } => applications(shell, action).await?,

        Commands::Election { action } => election(shell, action).await?,

        Commands::Notifications { action } => {
            shell.enter(Route::Notifications)?;
            let api = shell.api()?;
            let ctx = shell.context()?.clone();
            let mut feed = NotificationFeed::load(&api, &shell.store, &ctx).await?;

            match action.unwrap_or(NotificationAction::List) {
                NotificationAction::List => {
                    let mut table = Table::new(&["ID", "Title", "Message", "Date"]);
                    for n in feed.visible() {
                        table.row(vec![
                            or_dash(n.id.as_deref()).to_string(),
                            n.title_or_default().to_string(),
                            or_dash(n.message.as_deref()).to_string(),
                            n.created_at
                                .as_deref()
                                .map(format_timestamp)
                                .unwrap_or_else(|| DASH.to_string()),
                        ]);
                    }
                    if table.is_empty() {
                        println!("No notifications.");
                    } else {
                        table.print(shell.format)?;
                    }
                }
                NotificationAction::Dismiss { id } => {
                    if !feed
                        .notifications
                        .iter()
                        .any(|n| n.id.as_deref() == Some(id.as_str()))
                    {
                        tracing::warn!(id = %id, "Dismissing a notification that is not in the feed");
                    }
                    feed.dismiss(&mut shell.store, &id)?;
                    println!("Dismissed. {} notification(s) left.", feed.visible().len());
                }
            }
        }

        Commands::Notify { title, message } => {
            shell.enter(Route::SendNotification)?;
            let form = NotificationForm { title, message };
            println!("{}", views::send_notification(&shell.api()?, &form).await?);
        }

        Commands::Report { field, description } => {
            shell.enter(Route::ReportVoterError)?;
            let form = ReportForm { field, description };
            println!("{}", views::submit_report(&shell.api()?, &form).await?);
        }

        Commands::Reports => {
            shell.enter(Route::AdminReports)?;
            let reports = views::load_reports(&shell.api()?).await?;
            let mut table = Table::new(&["Voter ID", "Field", "Description", "Status", "Submitted"]);
            for r in &reports {
                table.row(vec![
                    or_dash(r.voter_id.as_deref()).to_string(),
                    or_dash(r.field.as_deref()).to_string(),
                    or_dash(r.description.as_deref()).to_string(),
                    or_dash(r.status.as_deref()).to_string(),
                    r.created_at
                        .as_deref()
                        .map(format_timestamp)
                        .unwrap_or_else(|| DASH.to_string()),
                ]);
            }
            if table.is_empty() {
                println!("No reports.");
            } else {
                table.print(shell.format)?;
            }
        }

        Commands::Results => {
            shell.enter(Route::ElectionResults)?;
            let view = ResultsView::load(&shell.api()?).await?;
            if !view.published {
                println!("Results have not been published yet.");
                return Ok(());
            }

            let mut table = Table::new(&["Position", "Rank", "Name", "Voter ID", "Votes", "Leading"]);
            for standings in &view.positions {
                for row in &standings.rows {
                    table.row(vec![
                        standings.position.clone(),
                        row.rank.to_string(),
                        row.name.clone(),
                        row.voter_id.clone(),
                        row.votes.to_string(),
                        if row.leading { "yes" } else { "" }.to_string(),
                    ]);
                }
            }
            if table.is_empty() {
                println!("No results.");
            } else {
                table.print(shell.format)?;
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

async fn dashboard(shell: &Shell) -> Result<()> {
    let route = settle(&shell.session, Route::Dashboard.path());
    match route {
        Route::AdminDashboard => {
            let ctx = shell.context()?;
            println!("Welcome, {}", ctx.display_name());
            let mut table = Table::new(&["Screen", "Path", "Description"]);
            for tile in ADMIN_TILES {
                table.row(vec![
                    tile.title.to_string(),
                    tile.route.path().to_string(),
                    tile.description.to_string(),
                ]);
            }
            table.print(shell.format)?;
        }
        Route::VoterDashboard => {
            let ctx = shell.context()?;
            let board = views::load_voter_dashboard(&shell.api()?, &shell.store, ctx).await?;

            println!("{}", board.greeting);
            if let Some(id) = &board.voter_id {
                println!("Voter ID: {}", id);
            }
            if let Some(phase) = board.phase {
                println!("Election phase: {}", phase.label());
            }
            match &board.candidacy {
                Some(CandidacySummary::Applied {
                    position,
                    status,
                    reference_number,
                }) => println!(
                    "Your application for {} is {} (ref {})",
                    position,
                    status,
                    or_dash(reference_number.as_deref())
                ),
                Some(CandidacySummary::CanApply { deadline }) => println!(
                    "Nominations are open until {}. Run `electra apply` to stand.",
                    or_dash(deadline.as_deref())
                ),
                Some(CandidacySummary::Closed { reason }) => println!("Candidacy: {}", reason),
                None => {}
            }

            println!("\nNotifications ({} unread)", board.unread);
            for n in &board.recent {
                println!("  {}: {}", n.title_or_default(), or_dash(n.message.as_deref()));
            }

            println!();
            let mut table = Table::new(&["Screen", "Path", "Description"]);
            for tile in VOTER_TILES {
                table.row(vec![
                    tile.title.to_string(),
                    tile.route.path().to_string(),
                    tile.description.to_string(),
                ]);
            }
            table.print(shell.format)?;
        }
        _ => bail!("Not signed in. Run `electra login`."),
    }
    Ok(())
}

async fn voters(shell: &mut Shell, action: VoterAction) -> Result<()> {
    match action {
        VoterAction::List { search } => {
            let admin = shell.session.has_role(Role::Admin);
            shell.enter(if admin {
                Route::AdminVotersList
            } else {
                Route::VotersList
            })?;

            let mut roster = VoterRoster::load(&shell.api()?).await?;
            let applied = roster.search(&search).to_string();
            if applied != search.trim() {
                tracing::debug!(input = %search, applied = %applied, "Search narrowed");
            }

            let mut table = if admin {
                Table::new(&[
                    "#", "Voter ID", "Name", "Age", "Address", "Email", "Phone", "Branch",
                ])
            } else {
                Table::new(&["#", "Voter ID", "Name", "Age", "Address"])
            };
            for row in roster.rows() {
                let mut cells = vec![
                    row.serial.to_string(),
                    row.voter_id,
                    row.name,
                    row.age,
                    row.address,
                ];
                if admin {
                    cells.extend([row.email, row.phone_no, row.branch_name]);
                }
                table.row(cells);
            }

            if table.is_empty() {
                println!("No voters match '{}'.", applied);
            } else {
                table.print(shell.format)?;
            }
        }

        VoterAction::Add {
            voter_id,
            full_name,
            dob,
            address,
            email,
            phone,
            branch,
        } => {
            shell.enter(Route::AddVoter)?;
            let form = NewVoterForm {
                voter_id,
                full_name,
                date_of_birth: dob,
                address,
                email,
                phone_no: phone,
                branch_name: branch,
            };
            println!("{}", views::add_voter(&shell.api()?, &form).await?);
        }

        VoterAction::Edit { voter_id, set } => {
            shell.enter(Route::AdminVotersList)?;
            if set.is_empty() {
                bail!("Nothing to change. Pass --set field=value.");
            }

            let api = shell.api()?;
            let mut roster = VoterRoster::load(&api).await?;
            let mut editor = roster
                .edit(&voter_id)
                .ok_or_else(|| anyhow!("No voter with ID {}", voter_id))?;
            for (field, value) in set {
                if !editor.set(&field, value) {
                    bail!(
                        "Unknown field '{}'. Editable: full_name, date_of_birth, address, email, phone_no, branch_name, photo_url",
                        field
                    );
                }
            }
            print_saved(roster.save(&api, &editor).await?);
        }
    }
    Ok(())
}

async fn applications(shell: &Shell, action: ApplicationAction) -> Result<()> {
    shell.enter(Route::AdminCandidateApplications)?;
    let api = shell.api()?;

    match action {
        ApplicationAction::List { status, position } => {
            let query = ApplicationsQuery {
                status: status.as_deref().map(parse_status).transpose()?,
                position,
            };
            let board = ApplicationsBoard::load(&api, query).await?;

            let mut table = Table::new(&[
                "ID", "Ref", "Name", "Voter ID", "Position", "Branch", "Status", "Applied",
                "Documents",
            ]);
            for app in &board.applications {
                let docs: Vec<String> = board
                    .document_links(app)
                    .into_iter()
                    .map(|d| format!("{}: {}", d.label, d.url))
                    .collect();
                table.row(vec![
                    or_dash(app.id.as_deref()).to_string(),
                    or_dash(app.reference_number.as_deref()).to_string(),
                    or_dash(app.full_name.as_deref()).to_string(),
                    or_dash(app.voter_id.as_deref()).to_string(),
                    or_dash(app.position.as_deref()).to_string(),
                    or_dash(app.branch_name.as_deref()).to_string(),
                    app.status_label().to_string(),
                    app.applied_at
                        .as_deref()
                        .map(format_timestamp)
                        .unwrap_or_else(|| DASH.to_string()),
                    docs.join(" "),
                ]);
            }

            if table.is_empty() {
                println!("No applications.");
            } else {
                table.print(shell.format)?;
            }
        }

        ApplicationAction::Review {
            id,
            decision,
            remarks,
        } => {
            let mut board = ApplicationsBoard::load(&api, ApplicationsQuery::default()).await?;
            if !board.start_review(&id) {
                bail!("No application with ID {}", id);
            }
            if let Some(review) = board.review.as_mut() {
                review.status = parse_status(&decision)?;
                review.admin_remarks = remarks;
            }

            if let Some(message) = board.submit_review(&api).await? {
                println!("{}", message);
            }
            if let Some(app) = board
                .applications
                .iter()
                .find(|a| a.id.as_deref() == Some(id.as_str()))
            {
                print_application(app);
            }
        }
    }
    Ok(())
}

async fn election(shell: &Shell, action: ElectionAction) -> Result<()> {
    shell.enter(Route::AdminNominationPortal)?;
    let api = shell.api()?;
    let mut portal = NominationPortal::load(&api).await?;

    match action {
        ElectionAction::Show => {}
        ElectionAction::Set {
            phase,
            deadline,
            notes,
        } => {
            portal.form.set_phase(&phase)?;
            if let Some(deadline) = deadline {
                portal.form.nomination_last_date = deadline;
            }
            if let Some(notes) = notes {
                portal.form.notes = notes;
            }
            print_saved(portal.save(&api).await?);
        }
        ElectionAction::Remind => match portal.send_reminder(&api).await? {
            Some(message) => println!("{}", message),
            None => println!(
                "Reminders can only be sent while nominations are open (phase: {}).",
                portal.form.phase.label()
            ),
        },
    }

    let form = &portal.form;
    println!("Phase:    {}", form.phase.label());
    println!("Deadline: {}", non_empty_or_dash(&form.nomination_last_date));
    println!("Notes:    {}", non_empty_or_dash(&form.notes));
    Ok(())
}

fn print_candidacy(view: &CandidacyView) {
    if let Some(voter) = view.voter() {
        println!(
            "Voter:    {} ({})",
            or_dash(voter.display_name()),
            or_dash(voter.voter_id.as_deref())
        );
    }
    if let Some(config) = view.config() {
        println!("Phase:    {}", config.phase.label());
        println!("Deadline: {}", or_dash(config.nomination_last_date.as_deref()));
    }

    match view.application() {
        Some(app) => print_application(app),
        None if view.can_apply() => {
            println!("You can apply. Positions: {}", electra::model::POSITIONS.join(", "));
        }
        None => println!(
            "{}",
            view.blocked_reason()
                .or(view.status.message.as_deref())
                .unwrap_or("You cannot apply right now.")
        ),
    }
}

/// The write went through; a failed reload is only a warning
fn print_saved(saved: Saved) {
    println!("{}", saved.message);
    if let Some(e) = saved.reload_error {
        tracing::warn!("Reload after save failed: {}", e);
        eprintln!("Warning: the change was saved, but reloading failed: {}", e);
    }
}

fn print_application(app: &CandidateApplication) {
    println!("Application {}", or_dash(app.reference_number.as_deref()));
    println!("  Position: {}", or_dash(app.position.as_deref()));
    println!("  Status:   {}", app.status_label());
    if let Some(remarks) = app.admin_remarks.as_deref().filter(|r| !r.is_empty()) {
        println!("  Remarks:  {}", remarks);
    }
}

fn parse_status(raw: &str) -> Result<ApplicationStatus> {
    raw.parse::<ApplicationStatus>().map_err(|e| anyhow!(e))
}

fn non_empty_or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        DASH
    } else {
        value
    }
}

/// Read a file into an upload, guessing its content type from the extension
fn attachment(path: Option<&Path>) -> Result<Option<Attachment>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    let mut upload = Attachment::new(file_name, bytes);
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());
    if let Some(content_type) = extension.as_deref().and_then(content_type_for) {
        upload = upload.with_content_type(content_type);
    }
    Ok(Some(upload))
}

fn content_type_for(extension: &str) -> Option<&'static str> {
    match extension {
        "pdf" => Some("application/pdf"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

fn password_or_prompt(password: Option<String>) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }
    eprint!("Password: ");
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("Failed to read password")?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}
