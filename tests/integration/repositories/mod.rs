// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

mod country_repository_test;
mod course_repository_test;
mod subject_repository_test;
mod teacher_repository_test;
mod thematic_repository_test;
