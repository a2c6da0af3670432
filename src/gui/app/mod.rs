mod modals;

use std::{
    collections::HashSet,
    time::{
        Duration,
        Instant,
    },
};

use eframe::egui;
use modals::Modals;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    autosave::AutoSaveStore,
    chapter_list::chapter_section,
    chart_panel::ChartPanel,
    content_modal::ContentKind,
    notifications::NotificationCenter,
    plan_form::PlanForm,
    session_cards::session_cards,
    settings::{
        SettingsData,
        SETTINGS_FILE,
    },
    theme::{
        set_theme,
        Theme,
    },
    time_display::TimeDisplay,
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::{
        models::{
            chapter_by_id,
            require_chapter,
            Chapter,
            SessionActionKind,
            StudySession,
            Subject,
        },
        tasks::{
            TaskManager,
            TaskResult,
        },
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub struct StudydeskApp {
    // Configuration
    settings: SettingsData,

    // Server data, read-only on the client
    sessions: Vec<StudySession>,
    chapters: Vec<Chapter>,
    subjects: Vec<Subject>,

    // UI state
    theme: Theme,
    notifications: NotificationCenter,
    actions: ActionQueue,
    time_display: TimeDisplay,
    chart: ChartPanel,
    plan_form: PlanForm,
    fetching_chapters: HashSet<i64>,
    loading: bool,

    // Modals
    modals: Modals,

    task_manager: TaskManager,
}

impl StudydeskApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_json_or_default::<SettingsData>(SETTINGS_FILE);
        let theme = Theme::default();
        set_theme(&cc.egui_ctx, &theme);

        let mut plan_form = PlanForm::new();
        AutoSaveStore::restore(&mut plan_form.form);

        let task_manager = TaskManager::new();
        task_manager.load_dashboard(settings.base_url.clone());
        task_manager.load_chart(settings.base_url.clone());

        let mut chart = ChartPanel::new();
        chart.set_loading();

        Self {
            settings,
            sessions: Vec::new(),
            chapters: Vec::new(),
            subjects: Vec::new(),
            theme,
            notifications: NotificationCenter::new(),
            actions: ActionQueue::new(),
            time_display: TimeDisplay::new(),
            chart,
            plan_form,
            fetching_chapters: HashSet::new(),
            loading: true,
            modals: Modals::default(),
            task_manager,
        }
    }

    fn reload(&mut self) {
        self.loading = true;
        self.chart.set_loading();
        self.task_manager.load_dashboard(self.settings.base_url.clone());
        self.task_manager.load_chart(self.settings.base_url.clone());
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::DashboardLoaded(Ok(data)) => {
                self.sessions = data.sessions;
                self.chapters = data.chapters;
                self.subjects = data.subjects;
                self.loading = false;
                self.time_display.force_refresh();
            }
            TaskResult::DashboardLoaded(Err(e)) => {
                self.loading = false;
                eprintln!("Dashboard load failed: {}", e);
                self.notifications.error("Error loading dashboard. Please try again.");
            }
            TaskResult::ChartLoaded(Ok(chart)) => {
                self.chart.set_data(chart);
            }
            TaskResult::ChartLoaded(Err(e)) => {
                eprintln!("Chart load failed: {}", e);
                self.chart.set_failed();
                self.notifications.error("Failed to load chart data.");
            }
            TaskResult::ContentFetched { chapter_id, result } => {
                self.fetching_chapters.remove(&chapter_id);
                match result {
                    Ok(()) => {
                        let title = chapter_by_id(&self.chapters, chapter_id)
                            .map(|c| c.title.clone())
                            .unwrap_or_else(|| format!("chapter {}", chapter_id));
                        self.notifications
                            .success(format!("Study content fetched for {}!", title));
                        self.task_manager.schedule_reload(Duration::from_millis(1000));
                    }
                    Err(e) => {
                        eprintln!("Content fetch failed: {}", e);
                        self.notifications.error("Error fetching study content.");
                    }
                }
            }
            TaskResult::SessionSubmitted { kind, result } => match result {
                Ok(()) => {
                    self.notifications.success(kind.success_message());
                    self.reload();
                }
                Err(e) => {
                    eprintln!("Session submit failed: {}", e);
                    self.notifications.error(kind.failure_message());
                }
            },
            TaskResult::PlanSubmitted(Ok(())) => {
                self.notifications.success("Study schedule created successfully!");
                self.reload();
            }
            TaskResult::PlanSubmitted(Err(e)) => {
                eprintln!("Plan submit failed: {}", e);
                self.notifications.error("Error creating schedule. Please try again.");
            }
            TaskResult::RequestReload => self.reload(),
        }
    }

    fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::CompleteSession { session_id } => {
                self.begin_session_action(SessionActionKind::Complete, &session_id);
            }
            UiAction::MissSession { session_id } => {
                self.begin_session_action(SessionActionKind::Miss, &session_id);
            }
            UiAction::RescheduleSession { .. } => {
                self.notifications.warning("Rescheduling is not yet implemented.");
            }
            UiAction::ToggleSubject { .. } => {
                self.notifications.warning("Subject toggling is not yet implemented.");
            }
            UiAction::ReorderSessions => {
                self.notifications.warning("Session reordering is not yet implemented.");
            }
            UiAction::FetchContent { chapter_id } => {
                if let Err(e) = require_chapter(&self.chapters, chapter_id) {
                    self.notifications.error(e.to_string());
                    return;
                }
                // A fetch already in flight for this chapter wins.
                if self.fetching_chapters.insert(chapter_id) {
                    self.task_manager
                        .fetch_chapter_content(self.settings.base_url.clone(), chapter_id);
                }
            }
            UiAction::ViewSummary { chapter_id } => {
                self.open_content(chapter_id, ContentKind::Summary);
            }
            UiAction::ViewWikipedia { chapter_id } => {
                self.open_content(chapter_id, ContentKind::Wikipedia);
            }
            UiAction::ReloadDashboard => self.reload(),
        }
    }

    fn begin_session_action(&mut self, kind: SessionActionKind, session_id: &str) {
        if let Err(e) = self.modals.session_action.begin(kind, session_id) {
            eprintln!("Session action rejected: {}", e);
            self.notifications.error("Could not open the confirmation dialog.");
        }
    }

    fn open_content(&mut self, chapter_id: i64, kind: ContentKind) {
        match require_chapter(&self.chapters, chapter_id) {
            Ok(chapter) => self.modals.content.open_for(chapter, kind),
            Err(e) => self.notifications.error(e.to_string()),
        }
    }

    fn quick_save_pressed(ctx: &egui::Context) -> bool {
        ctx.input(|i| i.key_pressed(egui::Key::S) && (i.modifiers.ctrl || i.modifiers.mac_cmd))
    }
}

impl eframe::App for StudydeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        let now = Instant::now();
        AutoSaveStore::tick(&mut self.plan_form.form, now);

        if Self::quick_save_pressed(ctx) && AutoSaveStore::quick_save(&mut self.plan_form.form) {
            self.notifications.info("Draft saved.");
        }

        self.time_display.refresh(&self.sessions, now);

        if let Some(action) = TopBar::show(ctx, &mut self.settings, self.loading) {
            match action {
                TopBarAction::Reload => self.actions.push(UiAction::ReloadDashboard),
                TopBarAction::ApplyServer => {
                    self.settings.base_url =
                        self.settings.base_url.trim_end_matches('/').to_string();
                    if let Err(e) = save_json(&self.settings, SETTINGS_FILE) {
                        eprintln!("Failed to save settings: {}", e);
                    }
                    self.actions.push(UiAction::ReloadDashboard);
                }
            }
        }

        egui::SidePanel::right("detail_panel")
            .min_width(380.0)
            .default_width(430.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.chart.show(ui, &self.theme);
                    ui.add_space(12.0);
                    ui.separator();

                    chapter_section(
                        ui,
                        &self.chapters,
                        &self.subjects,
                        &self.fetching_chapters,
                        &mut self.time_display,
                        &mut self.actions,
                        &self.theme,
                    );

                    ui.add_space(12.0);
                    ui.separator();
                    ui.collapsing("New Study Plan", |ui| {
                        if let Some(fields) = self.plan_form.show(ui, &self.theme) {
                            self.task_manager
                                .submit_plan(self.settings.base_url.clone(), fields);
                            self.notifications.info("Creating intelligent study schedule...");
                        }
                    });
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(self.theme.heading("Upcoming Sessions"));
            ui.add_space(6.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                session_cards(
                    ui,
                    &self.sessions,
                    &self.time_display,
                    &mut self.actions,
                    &self.theme,
                );
            });
        });

        if let Some(submission) = self.modals.session_action.show(ctx) {
            self.task_manager.submit_session_action(
                self.settings.base_url.clone(),
                submission.kind,
                submission.target,
                submission.fields,
            );
        }
        self.modals.content.show(ctx);

        self.notifications.show(ctx, &self.theme);

        let queued: Vec<UiAction> = self.actions.drain().collect();
        for action in queued {
            self.handle_action(action);
        }

        // The minute/five-minute refreshers must tick without user input.
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}
