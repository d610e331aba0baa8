use crate::error::DealError;
use crate::io::DisplaySink;
use crate::participant::{House, Participant};
use crate::result::{Outcome, RoundResult, SeatResult};

use super::Game;

fn report_deal(result: Result<(), DealError>, sink: &mut dyn DisplaySink) {
    if let Err(err) = result {
        log::warn!("opening deal came up short: {err}");
        sink.display(&err.to_string());
    }
}

fn flip_hole_or_report(house: &mut House, sink: &mut dyn DisplaySink) {
    if let Err(err) = house.flip_hole_card() {
        log::warn!("hole card flip on an empty hand: {err}");
        sink.display(&err.to_string());
    }
}

impl Game {
    /// Plays one full round, start to finish.
    ///
    /// The phases run in fixed order: fresh shuffle, two-pass opening
    /// deal, hole card concealed, player hands shown, each player's hit
    /// loop, hole card revealed, the house draw, settlement, and
    /// cleanup. Announcements and hand renderings go to `sink`; the
    /// same outcomes come back as a [`RoundResult`]. When the call
    /// returns, every hand is empty and the engine is ready for the
    /// next round.
    ///
    /// ```no_run
    /// use twentyone::io::{StdinDecisions, StdoutSink};
    /// use twentyone::{Game, Player};
    ///
    /// let players = vec![Player::new("Morgan", Box::new(StdinDecisions))];
    /// let mut game = Game::new(players, 42);
    /// let result = game.play(&mut StdoutSink);
    /// println!("house finished on {}", result.house_total);
    /// ```
    pub fn play(&mut self, sink: &mut dyn DisplaySink) -> RoundResult {
        self.deck.populate();
        self.deck.shuffle(&mut self.rng);
        log::debug!(
            "new round: {} seats, {} cards",
            self.players.len(),
            self.deck.remaining()
        );

        // Two passes: one card to each player in seating order, then
        // the house.
        for _ in 0..2 {
            for player in &mut self.players {
                report_deal(self.deck.deal(player.hand_mut()), sink);
            }
            report_deal(self.deck.deal(self.house.hand_mut()), sink);
        }

        // Hide the hole card before anyone sees the house hand.
        flip_hole_or_report(&mut self.house, sink);

        for player in &self.players {
            sink.display(&player.describe());
        }

        for player in &mut self.players {
            self.deck.additional_cards(player, sink);
        }

        // The house comes back up before it draws.
        flip_hole_or_report(&mut self.house, sink);
        sink.display(&self.house.describe());

        self.deck.additional_cards(&mut self.house, sink);

        let result = self.settle(sink);

        for player in &mut self.players {
            player.hand_mut().clear();
        }
        self.house.hand_mut().clear();

        result
    }

    /// Compares every standing player to the house and announces each
    /// outcome. Busted players were announced during their turn and
    /// get no second announcement.
    fn settle(&self, sink: &mut dyn DisplaySink) -> RoundResult {
        let house_busted = self.house.is_busted();
        let house_total = self.house.hand().total();
        log::debug!("settling: house total {house_total}, busted {house_busted}");

        let mut seats = Vec::with_capacity(self.players.len());
        for player in &self.players {
            let total = player.hand().total();

            let outcome = if player.is_busted() {
                Outcome::Busted
            } else {
                let outcome = Outcome::against_house(total, house_total, house_busted);
                match outcome {
                    Outcome::Win => player.announce_win(sink),
                    Outcome::Lose => player.announce_lose(sink),
                    Outcome::Push => player.announce_push(sink),
                    Outcome::Busted => {}
                }
                outcome
            };

            seats.push(SeatResult {
                name: player.name().to_string(),
                total,
                outcome,
            });
        }

        RoundResult {
            seats,
            house_total,
            house_busted,
        }
    }
}
