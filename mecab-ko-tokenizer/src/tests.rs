//! 토큰 생성 결과를 검증하는 테스트 모듈
//!
//! 입력 텍스트별 기대 토큰 스트림(정규 표현)을 기준으로
//! 생성기의 적합성을 검증합니다.
