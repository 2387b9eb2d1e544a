//! Table actor: one tokio task owns each `TableState` and applies commands
//! strictly in arrival order.
//!
//! Timers never touch the state directly. They post `TimerFired` back into
//! the same queue, tagged with the generation (turn timer) or disconnect
//! epoch (grace timer) they were armed for, and stale firings are dropped.

use std::time::Duration;

use serde::Serialize;
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::config::TableConfig;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{ConnectionStatus, MatchStatus, Seat, TableState};
use crate::domain::{
    disconnect, end_match, extend_rounds, force_stop, format_cards, grace_expired, pass,
    reconnect, resolve_timeout, resolve_zombie_turns, select_seat, submit_play, table_snapshot,
    Card, TableEvent, TableSnapshot,
};
use crate::error::AppError;
use crate::errors::domain::DomainError;

const COMMAND_QUEUE_DEPTH: usize = 64;
const UPDATE_BUFFER: usize = 128;

type EventsReply = oneshot::Sender<Result<Vec<TableEvent>, AppError>>;

/// Which timer fired, and what it was armed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Turn { generation: u64 },
    Grace { seat: Seat, epoch: u64 },
}

pub enum TableCommand {
    SubmitPlay {
        seat: Seat,
        cards: Vec<Card>,
        reply: EventsReply,
    },
    Pass {
        seat: Seat,
        reply: EventsReply,
    },
    SelectSeat {
        seat: Seat,
        reply: EventsReply,
    },
    Disconnect {
        seat: Seat,
        reply: EventsReply,
    },
    Reconnect {
        seat: Seat,
        reply: EventsReply,
    },
    ExtendRounds {
        rounds: u32,
        reply: EventsReply,
    },
    EndMatch {
        reply: EventsReply,
    },
    ForceStop {
        reply: EventsReply,
    },
    Snapshot {
        viewer: Option<Seat>,
        reply: oneshot::Sender<TableSnapshot>,
    },
    TimerFired(TimerKind),
    Shutdown,
}

/// Broadcast after every command that changed the table.
#[derive(Debug, Clone, Serialize)]
pub struct TableUpdate {
    pub table_id: Uuid,
    pub generation: u64,
    pub events: Vec<TableEvent>,
}

/// Cloneable front door to a running table.
#[derive(Clone, Debug)]
pub struct TableHandle {
    table_id: Uuid,
    sender: mpsc::Sender<TableCommand>,
    updates: broadcast::Sender<TableUpdate>,
}

impl TableHandle {
    pub fn table_id(&self) -> Uuid {
        self.table_id
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TableUpdate> {
        self.updates.subscribe()
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    pub async fn submit_play(
        &self,
        seat: Seat,
        cards: Vec<Card>,
    ) -> Result<Vec<TableEvent>, AppError> {
        self.request(|reply| TableCommand::SubmitPlay { seat, cards, reply })
            .await?
    }

    pub async fn pass(&self, seat: Seat) -> Result<Vec<TableEvent>, AppError> {
        self.request(|reply| TableCommand::Pass { seat, reply }).await?
    }

    pub async fn select_seat(&self, seat: Seat) -> Result<Vec<TableEvent>, AppError> {
        self.request(|reply| TableCommand::SelectSeat { seat, reply })
            .await?
    }

    pub async fn disconnect(&self, seat: Seat) -> Result<Vec<TableEvent>, AppError> {
        self.request(|reply| TableCommand::Disconnect { seat, reply })
            .await?
    }

    pub async fn reconnect(&self, seat: Seat) -> Result<Vec<TableEvent>, AppError> {
        self.request(|reply| TableCommand::Reconnect { seat, reply })
            .await?
    }

    pub async fn extend_rounds(&self, rounds: u32) -> Result<Vec<TableEvent>, AppError> {
        self.request(|reply| TableCommand::ExtendRounds { rounds, reply })
            .await?
    }

    pub async fn end_match(&self) -> Result<Vec<TableEvent>, AppError> {
        self.request(|reply| TableCommand::EndMatch { reply }).await?
    }

    pub async fn force_stop(&self) -> Result<Vec<TableEvent>, AppError> {
        self.request(|reply| TableCommand::ForceStop { reply }).await?
    }

    pub async fn snapshot(&self, viewer: Option<Seat>) -> Result<TableSnapshot, AppError> {
        self.request(|reply| TableCommand::Snapshot { viewer, reply })
            .await
    }

    /// Ask the actor to stop. Commands already queued are applied first.
    pub async fn shutdown(&self) -> Result<(), AppError> {
        self.sender
            .send(TableCommand::Shutdown)
            .await
            .map_err(|_| self.closed())
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> TableCommand,
    ) -> Result<T, AppError> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(make(reply))
            .await
            .map_err(|_| self.closed())?;
        response.await.map_err(|_| self.closed())
    }

    fn closed(&self) -> AppError {
        AppError::table_closed(format!("Table {} is no longer running", self.table_id))
    }
}

struct TurnTimer {
    generation: u64,
    deadline: Instant,
    cancel: CancellationToken,
}

pub struct TableActor {
    table_id: Uuid,
    config: TableConfig,
    state: TableState,
    inbox: mpsc::Receiver<TableCommand>,
    /// Weak so dropping every handle still closes the queue.
    timer_sender: mpsc::WeakSender<TableCommand>,
    updates: broadcast::Sender<TableUpdate>,
    generation: u64,
    turn_timer: Option<TurnTimer>,
    /// Turn time left when the match paused; restored on resume.
    paused_remaining: Option<Duration>,
    grace_timers: [Option<CancellationToken>; PLAYERS],
    shutdown: CancellationToken,
}

impl TableActor {
    /// Start a table task and return its handle.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(table_id: Uuid, config: TableConfig) -> Result<TableHandle, AppError> {
        config.validate()?;
        let match_seed = config.seed.unwrap_or_else(rand::random);
        let (sender, inbox) = mpsc::channel(COMMAND_QUEUE_DEPTH);
        let (updates, _) = broadcast::channel(UPDATE_BUFFER);

        let actor = TableActor {
            table_id,
            state: TableState::new(config.target_rounds, config.base_score, match_seed),
            config,
            inbox,
            timer_sender: sender.downgrade(),
            updates: updates.clone(),
            generation: 0,
            turn_timer: None,
            paused_remaining: None,
            grace_timers: std::array::from_fn(|_| None),
            shutdown: CancellationToken::new(),
        };

        let span = info_span!("table", %table_id);
        tokio::spawn(actor.run().instrument(span));

        Ok(TableHandle {
            table_id,
            sender,
            updates,
        })
    }

    async fn run(mut self) {
        info!(
            target_rounds = self.config.target_rounds,
            base_score = self.config.base_score,
            match_seed = self.state.match_seed,
            "Table opened"
        );
        while let Some(command) = self.inbox.recv().await {
            if !self.handle(command) {
                break;
            }
        }
        self.shutdown.cancel();
        info!(generation = self.generation, "Table closed");
    }

    /// Returns false when the actor should stop.
    fn handle(&mut self, command: TableCommand) -> bool {
        match command {
            TableCommand::SubmitPlay { seat, cards, reply } => {
                let result = self.apply("submit_play", |s| submit_play(s, seat, &cards));
                respond(reply, result);
            }
            TableCommand::Pass { seat, reply } => {
                let result = self.apply("pass", |s| pass(s, seat));
                respond(reply, result);
            }
            TableCommand::SelectSeat { seat, reply } => {
                let result = self.apply("select_seat", |s| select_seat(s, seat));
                respond(reply, result);
            }
            TableCommand::Disconnect { seat, reply } => {
                let result = self.apply("disconnect", |s| disconnect(s, seat));
                respond(reply, result);
            }
            TableCommand::Reconnect { seat, reply } => {
                let result = self.apply("reconnect", |s| reconnect(s, seat));
                respond(reply, result);
            }
            TableCommand::ExtendRounds { rounds, reply } => {
                let result = self.apply("extend_rounds", |s| extend_rounds(s, rounds));
                respond(reply, result);
            }
            TableCommand::EndMatch { reply } => {
                let result = self.apply("end_match", end_match);
                respond(reply, result);
            }
            TableCommand::ForceStop { reply } => {
                let result = self.apply("force_stop", |s| Ok(force_stop(s)));
                respond(reply, result);
            }
            TableCommand::Snapshot { viewer, reply } => {
                let snapshot = table_snapshot(&self.state, viewer, self.turn_remaining());
                if reply.send(snapshot).is_err() {
                    warn!("Snapshot requester went away before the reply");
                }
            }
            TableCommand::TimerFired(timer) => self.on_timer(timer),
            TableCommand::Shutdown => return false,
        }
        true
    }

    fn apply<F>(&mut self, command: &'static str, op: F) -> Result<Vec<TableEvent>, AppError>
    where
        F: FnOnce(&mut TableState) -> Result<Vec<TableEvent>, DomainError>,
    {
        match op(&mut self.state) {
            Ok(events) => Ok(self.settle(events)),
            Err(err) => {
                let err = AppError::from(err);
                debug!(command, code = err.code().as_str(), detail = err.detail(), "Command rejected");
                Err(err)
            }
        }
    }

    fn on_timer(&mut self, timer: TimerKind) {
        match timer {
            TimerKind::Turn { generation } => {
                let armed = self.turn_timer.as_ref().map(|t| t.generation);
                if armed != Some(generation) {
                    debug!(generation, ?armed, "Stale turn timer discarded");
                    return;
                }
                self.turn_timer = None;
                info!(
                    seat = self.state.trick.turn_seat,
                    round_no = self.state.current_round,
                    generation,
                    "Turn timer expired"
                );
                match resolve_timeout(&mut self.state) {
                    Ok(events) => {
                        self.settle(events);
                    }
                    Err(err) => error!(generation, error = %err, "Turn timeout could not be resolved"),
                }
            }
            TimerKind::Grace { seat, epoch } => match grace_expired(&mut self.state, seat, epoch) {
                Ok(events) if events.is_empty() => {
                    debug!(seat, epoch, "Stale grace timer discarded");
                }
                Ok(events) => {
                    info!(seat, epoch, "Reconnect grace expired");
                    self.settle(events);
                }
                Err(err) => error!(seat, epoch, error = %err, "Grace expiry could not be applied"),
            },
        }
    }

    /// Run due zombie turns, then bring timers and subscribers up to date.
    fn settle(&mut self, mut events: Vec<TableEvent>) -> Vec<TableEvent> {
        match resolve_zombie_turns(&mut self.state) {
            Ok(more) => events.extend(more),
            Err(err) => error!(error = %err, "Zombie turn could not be resolved"),
        }
        if events.is_empty() {
            return events;
        }

        self.generation += 1;
        self.log_events(&events);
        self.sync_grace_timers(&events);
        self.sync_turn_timer(events.iter().any(moves_turn));

        let update = TableUpdate {
            table_id: self.table_id,
            generation: self.generation,
            events: events.clone(),
        };
        // No subscribers is fine.
        let _ = self.updates.send(update);
        events
    }

    fn sync_turn_timer(&mut self, turn_moved: bool) {
        match self.state.status {
            MatchStatus::Playing => {
                if turn_moved {
                    self.paused_remaining = None;
                    self.arm_turn_timer(self.config.turn_timeout);
                } else if self.turn_timer.is_none() {
                    let delay = self
                        .paused_remaining
                        .take()
                        .unwrap_or(self.config.turn_timeout);
                    self.arm_turn_timer(delay);
                }
            }
            MatchStatus::Paused => {
                if let Some(timer) = self.turn_timer.take() {
                    timer.cancel.cancel();
                    self.paused_remaining =
                        Some(timer.deadline.saturating_duration_since(Instant::now()));
                }
            }
            MatchStatus::Waiting | MatchStatus::PendingDecision | MatchStatus::Ended => {
                if let Some(timer) = self.turn_timer.take() {
                    timer.cancel.cancel();
                }
                self.paused_remaining = None;
            }
        }
    }

    fn arm_turn_timer(&mut self, delay: Duration) {
        if let Some(old) = self.turn_timer.take() {
            old.cancel.cancel();
        }
        let generation = self.generation;
        let cancel = self.spawn_timer(delay, TimerKind::Turn { generation });
        debug!(
            generation,
            seat = self.state.trick.turn_seat,
            delay_ms = delay.as_millis() as u64,
            "Turn timer armed"
        );
        self.turn_timer = Some(TurnTimer {
            generation,
            deadline: Instant::now() + delay,
            cancel,
        });
    }

    fn sync_grace_timers(&mut self, events: &[TableEvent]) {
        for event in events {
            let TableEvent::SeatStatusChanged { seat, status } = event else {
                continue;
            };
            let Some(slot) = self.grace_timers.get_mut(*seat as usize) else {
                continue;
            };
            if let Some(previous) = slot.take() {
                previous.cancel();
            }
            if *status == ConnectionStatus::Disconnected {
                let epoch = self.state.seats[*seat as usize].disconnect_epoch;
                let cancel = self.spawn_timer(
                    self.config.reconnect_grace,
                    TimerKind::Grace { seat: *seat, epoch },
                );
                self.grace_timers[*seat as usize] = Some(cancel);
            }
        }
        if self.state.status == MatchStatus::Ended {
            for slot in &mut self.grace_timers {
                if let Some(timer) = slot.take() {
                    timer.cancel();
                }
            }
        }
    }

    fn spawn_timer(&self, delay: Duration, timer: TimerKind) -> CancellationToken {
        let cancel = self.shutdown.child_token();
        let Some(sender) = self.timer_sender.upgrade() else {
            return cancel;
        };
        let token = cancel.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let _ = sender.send(TableCommand::TimerFired(timer)).await;
                }
            }
        });
        cancel
    }

    fn turn_remaining(&self) -> Option<Duration> {
        match self.state.status {
            MatchStatus::Playing => self
                .turn_timer
                .as_ref()
                .map(|t| t.deadline.saturating_duration_since(Instant::now())),
            MatchStatus::Paused => self.paused_remaining,
            _ => None,
        }
    }

    fn log_events(&self, events: &[TableEvent]) {
        let generation = self.generation;
        for event in events {
            match event {
                TableEvent::PlayAccepted {
                    seat,
                    cards,
                    combo,
                    auto,
                } => debug!(
                    generation,
                    seat,
                    cards = %format_cards(cards),
                    combo = ?combo,
                    auto,
                    "Play accepted"
                ),
                TableEvent::Passed { seat, auto } => debug!(generation, seat, auto, "Passed"),
                TableEvent::NewLead { seat } => debug!(generation, seat, "New lead"),
                TableEvent::RoundDealt {
                    round_no,
                    first_seat,
                } => info!(generation, round_no, first_seat, "Round dealt"),
                TableEvent::RoundOver { round_no, winner } => {
                    info!(generation, round_no, winner, "Round over")
                }
                TableEvent::BombTriggered { bomb } => info!(
                    generation,
                    round_no = self.state.current_round,
                    trigger = ?bomb.trigger,
                    culprit = bomb.culprit,
                    winner = bomb.winner,
                    points = bomb.points,
                    "Bomb triggered"
                ),
                TableEvent::SeatStatusChanged { seat, status } => {
                    info!(generation, seat, status = ?status, "Seat status changed")
                }
                TableEvent::PendingDecision { rounds_played } => {
                    info!(generation, rounds_played, "Round target reached")
                }
                TableEvent::RoundsExtended { target_rounds } => {
                    info!(generation, target_rounds, "Rounds extended")
                }
                TableEvent::MatchEnded { forced } => info!(generation, forced, "Match ended"),
                other => debug!(generation, event = ?other, "Table event"),
            }
        }
    }
}

/// Events after which a different seat (or a fresh trick) is on turn.
fn moves_turn(event: &TableEvent) -> bool {
    matches!(
        event,
        TableEvent::PlayAccepted { .. }
            | TableEvent::Passed { .. }
            | TableEvent::NewLead { .. }
            | TableEvent::RoundDealt { .. }
    )
}

fn respond(reply: EventsReply, result: Result<Vec<TableEvent>, AppError>) {
    if reply.send(result).is_err() {
        warn!("Caller went away before the reply");
    }
}
