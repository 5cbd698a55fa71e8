// =====================================================
// GSP 선택 (Generalized Second Price)
// =====================================================
// 순위: rank = bid * score
// 가격: charge = runner_up.bid * runner_up.score / winner.score + 0.01
//
// 스캔 규칙 (순서 의존, 병렬화 금지):
// 1. 처음 두 광고를 비교해 (1위, 2위) 초기화 (동점이면 먼저 온 광고가 1위)
// 2. 이후 광고마다:
//    - rank > 1위 rank  → 새 1위
//    - rank > 2위 rank  → 새 2위
//    동점은 기존 광고를 교체하지 않음 (first-seen wins)
//
// 주의: 새 1위가 나와도 밀려난 기존 1위는 2위 후보로 다시 고려되지 않음.
//       [5, 3, 10] 순위라면 2위는 5 가 아니라 3 이 됨.
//       재현성을 위해 이 동작을 그대로 유지함 (잠재적 버그로 표시).
// =====================================================

use super::types::{AuctionError, AuctionOutcome, MIN_INCREMENT};
use crate::domains::ad::models::Ad;

/// 전체 광고 중 낙찰 광고와 가격 결정
/// Pick the top-ranked ad and price it against the runner-up
///
/// # Arguments
/// * `ads` - 후보 광고 (저장소 조회 순서 그대로)
///
/// # Returns
/// * `Ok(AuctionOutcome)` - 1위, 2위 광고와 부과 금액
/// * `Err(InsufficientCandidates)` - 광고가 2개 미만
/// * `Err(DegenerateAuction)` - 1위 광고 품질 점수가 0
pub fn select_winner(ads: &[Ad]) -> Result<AuctionOutcome, AuctionError> {
    let (first, second, rest) = match ads {
        [first, second, rest @ ..] => (first, second, rest),
        _ => return Err(AuctionError::InsufficientCandidates { count: ads.len() }),
    };

    let (mut winner, mut runner_up) = if first.rank() >= second.rank() {
        (first, second)
    } else {
        (second, first)
    };

    for ad in rest {
        let rank = ad.rank();
        if rank > winner.rank() {
            winner = ad;
        } else if rank > runner_up.rank() {
            runner_up = ad;
        }
    }

    if winner.score == 0.0 {
        return Err(AuctionError::DegenerateAuction { ad_id: winner.id });
    }

    let charge = runner_up.rank() / winner.score + MIN_INCREMENT;
    if !charge.is_finite() {
        return Err(AuctionError::DegenerateAuction { ad_id: winner.id });
    }

    tracing::debug!(
        winner = winner.id,
        runner_up = runner_up.id,
        candidates = ads.len(),
        charge,
        "Auction resolved"
    );

    Ok(AuctionOutcome {
        winner: winner.clone(),
        runner_up: runner_up.clone(),
        charge,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_ad(id: u64, bid: f64, score: f64) -> Ad {
        Ad {
            id,
            bid,
            image_url: String::new(),
            advertiser_id: 100 + id,
            score,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_highest_rank_wins_and_pays_second_price() {
        // A: 10 * 2 = 20, B: 8 * 3 = 24, C: 5 * 1 = 5
        let ads = vec![
            create_test_ad(1, 10.0, 2.0),
            create_test_ad(2, 8.0, 3.0),
            create_test_ad(3, 5.0, 1.0),
        ];

        let outcome = select_winner(&ads).unwrap();

        assert_eq!(outcome.winner.id, 2);
        assert_eq!(outcome.runner_up.id, 1);
        // 10 * 2 / 3 + 0.01
        assert_close(outcome.charge, 20.0 / 3.0 + 0.01);
        assert!((outcome.charge - 6.6767).abs() < 1e-4);
    }

    #[test]
    fn test_winner_is_maximum_in_any_rotation() {
        let ads = vec![
            create_test_ad(1, 1.0, 1.0),
            create_test_ad(2, 4.0, 2.5),
            create_test_ad(3, 3.0, 1.0),
            create_test_ad(4, 9.0, 1.0),
        ];

        for shift in 0..ads.len() {
            let mut rotated = ads.clone();
            rotated.rotate_left(shift);
            let outcome = select_winner(&rotated).unwrap();
            assert_eq!(outcome.winner.id, 2, "rotation {shift}");
        }
    }

    #[test]
    fn test_two_candidates_ordered_by_rank() {
        let ads = vec![create_test_ad(1, 1.0, 1.0), create_test_ad(2, 2.0, 4.0)];

        let outcome = select_winner(&ads).unwrap();

        assert_eq!(outcome.winner.id, 2);
        assert_eq!(outcome.runner_up.id, 1);
        assert_close(outcome.charge, 1.0 / 4.0 + 0.01);
    }

    #[test]
    fn test_tie_first_seen_wins() {
        // 둘 다 rank 20: 먼저 온 광고가 1위
        let ads = vec![create_test_ad(1, 10.0, 2.0), create_test_ad(2, 4.0, 5.0)];

        let outcome = select_winner(&ads).unwrap();

        assert_eq!(outcome.winner.id, 1);
        assert_eq!(outcome.runner_up.id, 2);
        assert_close(outcome.charge, 20.0 / 2.0 + 0.01);
    }

    #[test]
    fn test_tie_later_equal_rank_never_replaces_runner_up() {
        // 세 광고 모두 rank 20: 세 번째는 1위도 2위도 되지 못함
        let ads = vec![
            create_test_ad(1, 10.0, 2.0),
            create_test_ad(2, 5.0, 4.0),
            create_test_ad(3, 20.0, 1.0),
        ];

        let outcome = select_winner(&ads).unwrap();

        assert_eq!(outcome.winner.id, 1);
        assert_eq!(outcome.runner_up.id, 2);
    }

    #[test]
    fn test_tie_with_winner_can_still_take_runner_up_slot() {
        // rank 20, 5, 20: 세 번째는 1위와 동점이라 1위가 되지 못하지만
        // 2위(5)보다는 엄격히 크므로 2위 자리를 차지함
        let ads = vec![
            create_test_ad(1, 10.0, 2.0),
            create_test_ad(2, 5.0, 1.0),
            create_test_ad(3, 4.0, 5.0),
        ];

        let outcome = select_winner(&ads).unwrap();

        assert_eq!(outcome.winner.id, 1);
        assert_eq!(outcome.runner_up.id, 3);
        assert_close(outcome.charge, 20.0 / 2.0 + 0.01);
    }

    #[test]
    fn test_displaced_winner_is_not_demoted_to_runner_up() {
        // rank 5, 3, 10: 진짜 2위는 5 이지만 스캔 규칙상 3 이 2위로 남음
        // (기존 동작 재현, 잠재적 버그)
        let ads = vec![
            create_test_ad(1, 5.0, 1.0),
            create_test_ad(2, 3.0, 1.0),
            create_test_ad(3, 5.0, 2.0),
        ];

        let outcome = select_winner(&ads).unwrap();

        assert_eq!(outcome.winner.id, 3);
        assert_eq!(outcome.runner_up.id, 2);
        assert_close(outcome.charge, 3.0 / 2.0 + 0.01);
    }

    #[test]
    fn test_insufficient_candidates() {
        assert_eq!(
            select_winner(&[]),
            Err(AuctionError::InsufficientCandidates { count: 0 })
        );
        assert_eq!(
            select_winner(&[create_test_ad(1, 10.0, 2.0)]),
            Err(AuctionError::InsufficientCandidates { count: 1 })
        );
    }

    #[test]
    fn test_zero_winner_score_is_degenerate() {
        let ads = vec![create_test_ad(1, 10.0, 0.0), create_test_ad(2, 7.0, 0.0)];

        assert_eq!(
            select_winner(&ads),
            Err(AuctionError::DegenerateAuction { ad_id: 1 })
        );
    }

    #[test]
    fn test_zero_bid_winner_with_positive_score_pays_increment() {
        // 모든 rank 가 0 이지만 1위 점수가 양수면 가격은 0.01
        let ads = vec![create_test_ad(1, 0.0, 3.0), create_test_ad(2, 5.0, 0.0)];

        let outcome = select_winner(&ads).unwrap();

        assert_eq!(outcome.winner.id, 1);
        assert_close(outcome.charge, MIN_INCREMENT);
    }
}
